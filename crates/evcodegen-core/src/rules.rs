// Evcodegen Exception Rules
// Names and limits that get special treatment during categorization and emission

use crate::category::Category;

/// Names excluded from every category even though they are integer defines.
///
/// `EV_VERSION` is the protocol version, the `BTN_*` entries are range
/// markers that share a value with the first button of their range.
pub const BLACKLIST: &[&str] = &[
    "EV_VERSION",
    "BTN_MISC",
    "BTN_MOUSE",
    "BTN_JOYSTICK",
    "BTN_GAMEPAD",
    "BTN_DIGI",
    "BTN_WHEEL",
    "BTN_TRIGGER_HAPPY",
];

/// Event type whose value is reused as the unknown-event-type marker
pub const UNKNOWN_EVENT_SENTINEL: &str = "EV_MAX";

/// Variant emitted in place of the sentinel
pub const UNKNOWN_EVENT_VARIANT: &str = "EV_UNK";

/// Unmapped event type codes below this map to the unknown variant
pub const UNKNOWN_EVENT_CODE_LIMIT: u32 = 31;

/// Event types whose code enum cannot be derived from their own name
pub const EVENT_CODE_OVERRIDES: &[(&str, Category)] = &[("EV_FF_STATUS", Category::Ff)];

pub fn is_blacklisted(name: &str) -> bool {
    BLACKLIST.contains(&name)
}

/// Whether `name` is the unknown-event-type sentinel of `category`
pub fn is_unknown_sentinel(category: Category, name: &str) -> bool {
    category == Category::Ev && name == UNKNOWN_EVENT_SENTINEL
}

/// Category whose enum is the code payload of event type `name`, if any.
///
/// `EV_REL` carries `REL_*` codes and so on; explicit overrides win over
/// the name-derived rule. The caller still has to check that the category
/// produced an enum at all.
pub fn event_code_category(name: &str) -> Option<Category> {
    if let Some((_, category)) = EVENT_CODE_OVERRIDES.iter().find(|(n, _)| *n == name) {
        return Some(*category);
    }

    let stem = name.strip_prefix(Category::Ev.prefix())?;
    Category::from_prefix(&format!("{}_", stem)).filter(|c| c.is_code_space())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blacklist() {
        assert!(is_blacklisted("EV_VERSION"));
        assert!(is_blacklisted("BTN_GAMEPAD"));
        assert!(is_blacklisted("BTN_TRIGGER_HAPPY"));
        assert!(!is_blacklisted("BTN_TRIGGER_HAPPY1"));
        assert!(!is_blacklisted("BTN_SOUTH"));
        assert!(!is_blacklisted("EV_MAX"));
    }

    #[test]
    fn test_blacklisted_names_would_otherwise_categorize() {
        for name in BLACKLIST {
            assert!(
                Category::classify(name).is_some(),
                "{} needs no blacklisting",
                name
            );
        }
    }

    #[test]
    fn test_sentinel_only_in_event_types() {
        assert!(is_unknown_sentinel(Category::Ev, "EV_MAX"));
        assert!(!is_unknown_sentinel(Category::Ev, "EV_KEY"));
        assert!(!is_unknown_sentinel(Category::Key, "EV_MAX"));
    }

    #[test]
    fn test_name_derived_payloads() {
        assert_eq!(event_code_category("EV_REL"), Some(Category::Rel));
        assert_eq!(event_code_category("EV_ABS"), Some(Category::Abs));
        assert_eq!(event_code_category("EV_KEY"), Some(Category::Key));
        assert_eq!(event_code_category("EV_SYN"), Some(Category::Syn));
        assert_eq!(event_code_category("EV_REP"), Some(Category::Rep));
        assert_eq!(event_code_category("EV_FF"), Some(Category::Ff));
        assert_eq!(event_code_category("EV_SW"), Some(Category::Sw));
    }

    #[test]
    fn test_ff_status_override() {
        assert_eq!(event_code_category("EV_FF_STATUS"), Some(Category::Ff));
    }

    #[test]
    fn test_no_payload_types() {
        assert_eq!(event_code_category("EV_PWR"), None);
        assert_eq!(event_code_category("EV_MAX"), None);
        assert_eq!(event_code_category("EV_BUS"), None);
        assert_eq!(event_code_category("EV_INPUT_PROP"), None);
        assert_eq!(event_code_category("KEY_A"), None);
    }
}
