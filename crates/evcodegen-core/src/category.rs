// Evcodegen Categories
// The fixed set of input-event constant families, in prefix priority order

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::GenerateError;

/// A family of input-subsystem constants, identified by its name prefix.
///
/// Declaration order is the matching priority: a name belongs to the first
/// category whose prefix it starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCountMacro, IntoStaticStr)]
pub enum Category {
    /// Event types (`EV_KEY`, `EV_REL`, ...)
    Ev,
    /// Relative axes
    Rel,
    /// Absolute axes
    Abs,
    /// Keyboard keys
    Key,
    /// Buttons, folded into the key enum on output
    Btn,
    Led,
    Snd,
    Msc,
    /// Switches
    Sw,
    /// Force feedback
    Ff,
    /// Synchronization codes
    Syn,
    /// Autorepeat parameters
    Rep,
    /// Device properties
    InputProp,
    /// Bus types from `linux/input.h`
    Bus,
}

impl Category {
    /// The name prefix that selects this category
    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Ev => "EV_",
            Category::Rel => "REL_",
            Category::Abs => "ABS_",
            Category::Key => "KEY_",
            Category::Btn => "BTN_",
            Category::Led => "LED_",
            Category::Snd => "SND_",
            Category::Msc => "MSC_",
            Category::Sw => "SW_",
            Category::Ff => "FF_",
            Category::Syn => "SYN_",
            Category::Rep => "REP_",
            Category::InputProp => "INPUT_PROP_",
            Category::Bus => "BUS_",
        }
    }

    /// All categories in matching priority order
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Number of categories
    pub const fn count() -> usize {
        <Category as EnumCount>::COUNT
    }

    /// First category whose prefix `name` starts with
    pub fn classify(name: &str) -> Option<Category> {
        Category::all().find(|c| name.starts_with(c.prefix()))
    }

    /// Category whose prefix is exactly `prefix`
    pub fn from_prefix(prefix: &str) -> Option<Category> {
        Category::all().find(|c| c.prefix() == prefix)
    }

    /// Whether an `EV_*` event type may carry this category's enum as the
    /// code of its `EventCode` variant.
    pub fn is_code_space(self) -> bool {
        !matches!(
            self,
            Category::Ev | Category::InputProp | Category::Bus
        )
    }

    /// Whether this category gets its own generated enum
    pub fn is_emitted(self) -> bool {
        self != Category::Btn
    }

    /// Rust type name of the generated enum
    pub fn enum_name(self) -> String {
        match self {
            Category::Ev => "EventType".to_string(),
            Category::InputProp => "InputProp".to_string(),
            Category::Bus => "BusType".to_string(),
            other => format!("EV_{}", other.prefix().trim_end_matches('_')),
        }
    }

    /// Name of the generated `code -> variant` function
    pub fn lookup_fn_name(self) -> String {
        format!("int_to_{}", snake_case(&self.enum_name()))
    }

    /// Verify that no prefix is a leading substring of another.
    ///
    /// First-match classification is only unambiguous when this holds.
    pub fn check_prefixes() -> Result<(), GenerateError> {
        for a in Category::all() {
            for b in Category::all() {
                if a != b && b.prefix().starts_with(a.prefix()) {
                    return Err(GenerateError::PrefixOverlap {
                        shorter: a.prefix(),
                        longer: b.prefix(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// `EventType` -> `event_type`, `EV_REL` -> `ev_rel`
fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
