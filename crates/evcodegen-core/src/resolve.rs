// Evcodegen Alias Resolver
// Turns per-value name lists into canonical entries with aliases

use crate::category::Category;
use crate::rules;
use crate::table::{NameList, SymbolTables};

/// One enum variant: the first name seen for a value plus its synonyms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEntry {
    /// Category the entry was scanned into (`Btn` for buttons in the key enum)
    pub category: Category,
    pub value: u32,
    pub name: String,
    pub aliases: Vec<String>,
}

impl CanonicalEntry {
    fn from_names(category: Category, value: u32, names: &NameList) -> Self {
        let mut names = names.iter().cloned();
        let name = names.next().unwrap_or_default();
        Self {
            category,
            value,
            name,
            aliases: names.collect(),
        }
    }

    /// Whether this entry stands for "unknown event type" rather than a value
    pub fn is_sentinel(&self) -> bool {
        rules::is_unknown_sentinel(self.category, &self.name)
    }

    /// Rust variant identifier for this entry
    pub fn variant(&self) -> &str {
        if self.is_sentinel() {
            rules::UNKNOWN_EVENT_VARIANT
        } else {
            &self.name
        }
    }
}

/// Canonical entries of one emitted enum, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub category: Category,
    pub entries: Vec<CanonicalEntry>,
}

impl ResolvedCategory {
    pub fn enum_name(&self) -> String {
        self.category.enum_name()
    }

    pub fn sentinel(&self) -> Option<&CanonicalEntry> {
        self.entries.iter().find(|e| e.is_sentinel())
    }

    /// Entries imported from the button category (key enum only)
    pub fn buttons(&self) -> impl Iterator<Item = &CanonicalEntry> {
        self.entries.iter().filter(|e| e.category == Category::Btn)
    }

    pub fn find(&self, name: &str) -> Option<&CanonicalEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn has_aliases(&self) -> bool {
        self.entries.iter().any(|e| !e.aliases.is_empty())
    }
}

/// Resolve one emitted category.
///
/// Returns `None` for the button category, which only exists as part of the
/// key enum, and for categories with no definitions.
pub fn resolve(tables: &SymbolTables, category: Category) -> Option<ResolvedCategory> {
    if !category.is_emitted() {
        return None;
    }

    let own = tables.get(category);
    let buttons = match category {
        Category::Key => tables.get(Category::Btn),
        _ => None,
    };
    if own.is_none() && buttons.is_none() {
        return None;
    }

    let mut entries: Vec<CanonicalEntry> = own
        .into_iter()
        .flat_map(|table| table.iter())
        .map(|(&value, names)| CanonicalEntry::from_names(category, value, names))
        .collect();

    for (&value, names) in buttons.into_iter().flat_map(|table| table.iter()) {
        match entries.iter_mut().find(|e| e.value == value) {
            Some(existing) => {
                log::warn!(
                    "{} shares value {:#x} with {}, emitting it as an alias",
                    names[0],
                    value,
                    existing.name
                );
                existing.aliases.extend(names.iter().cloned());
            }
            None => entries.push(CanonicalEntry::from_names(Category::Btn, value, names)),
        }
    }

    Some(ResolvedCategory { category, entries })
}

/// Resolve every emitted category in prefix priority order
pub fn resolve_all(tables: &SymbolTables) -> Vec<ResolvedCategory> {
    Category::all()
        .filter_map(|category| resolve(tables, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CategoryTables;

    fn tables_from(text: &str) -> SymbolTables {
        let mut tables = CategoryTables::new();
        tables.scan_reader(text.as_bytes()).unwrap();
        tables.freeze()
    }

    #[test]
    fn test_first_name_is_canonical() {
        let tables = tables_from("#define SW_LID 0x00\n#define SW_TABLET_MODE 0x01\n#define SW_RADIO 0x03\n#define SW_RFKILL_ALL 0x03\n");
        let sw = resolve(&tables, Category::Sw).unwrap();
        assert_eq!(sw.entries.len(), 3);
        assert_eq!(sw.entries[2].name, "SW_RADIO");
        assert_eq!(sw.entries[2].aliases, vec!["SW_RFKILL_ALL".to_string()]);
        assert!(sw.has_aliases());
    }

    #[test]
    fn test_event_type_sentinel() {
        let tables = tables_from("#define EV_SYN 0x00\n#define EV_KEY 0x01\n#define EV_MAX 0x1f\n");
        let ev = resolve(&tables, Category::Ev).unwrap();
        let sentinel = ev.sentinel().unwrap();
        assert_eq!(sentinel.value, 0x1f);
        assert_eq!(sentinel.variant(), "EV_UNK");
        assert_eq!(ev.find("EV_KEY").unwrap().variant(), "EV_KEY");
    }

    #[test]
    fn test_max_in_other_categories_is_plain() {
        let tables = tables_from("#define REL_X 0x00\n#define REL_MAX 0x0f\n");
        let rel = resolve(&tables, Category::Rel).unwrap();
        assert!(rel.sentinel().is_none());
        assert_eq!(rel.find("REL_MAX").unwrap().variant(), "REL_MAX");
    }

    #[test]
    fn test_buttons_fold_into_keys() {
        let tables = tables_from(
            "#define BTN_SOUTH 0x130\n#define KEY_A 30\n#define BTN_A 0x130\n#define KEY_B 48\n",
        );
        let key = resolve(&tables, Category::Key).unwrap();
        let names: Vec<&str> = key.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["KEY_A", "KEY_B", "BTN_SOUTH"]);
        assert_eq!(key.find("BTN_SOUTH").unwrap().aliases, vec!["BTN_A".to_string()]);
        assert_eq!(key.buttons().count(), 1);
        assert!(resolve(&tables, Category::Btn).is_none());
    }

    #[test]
    fn test_buttons_alone_still_produce_key_enum() {
        let tables = tables_from("#define BTN_LEFT 0x110\n");
        let key = resolve(&tables, Category::Key).unwrap();
        assert_eq!(key.entries.len(), 1);
        assert_eq!(key.entries[0].category, Category::Btn);
    }

    #[test]
    fn test_colliding_button_becomes_alias() {
        let tables = tables_from("#define KEY_OK 0x160\n#define BTN_ODD 0x160\n");
        let key = resolve(&tables, Category::Key).unwrap();
        assert_eq!(key.entries.len(), 1);
        assert_eq!(key.entries[0].aliases, vec!["BTN_ODD".to_string()]);
    }

    #[test]
    fn test_resolve_all_skips_empty_and_buttons() {
        let tables = tables_from("#define BUS_USB 0x03\n#define EV_SYN 0x00\n#define BTN_LEFT 0x110\n");
        let categories: Vec<Category> = resolve_all(&tables).iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::Ev, Category::Key, Category::Bus]);
    }
}
