// Evcodegen Tagged-Union Emitter
// EventCode: an event code interpreted according to its event type

use std::io::{self, Write};

use crate::category::Category;
use crate::resolve::{CanonicalEntry, ResolvedCategory};
use crate::rules;

use super::{emitted, write_enum_attributes};

/// Shape of one `EventCode` variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionVariant<'a> {
    /// `EV_REL(EV_REL)`: the code is one of the payload category's variants
    Payload { name: &'a str, payload: Category },
    /// `EV_UNK { event_type, event_code }`: raw pair outside known categories
    Unknown,
    /// Event type without a code enum
    Bare { name: &'a str },
}

/// Classify one event type entry.
///
/// `available` holds the categories that produced an enum; a payload is only
/// used when its enum exists.
pub fn union_variant<'a>(entry: &'a CanonicalEntry, available: &[Category]) -> UnionVariant<'a> {
    if entry.is_sentinel() {
        return UnionVariant::Unknown;
    }

    match rules::event_code_category(&entry.name) {
        Some(payload) if payload.is_emitted() && available.contains(&payload) => {
            UnionVariant::Payload {
                name: &entry.name,
                payload,
            }
        }
        _ => UnionVariant::Bare { name: &entry.name },
    }
}

/// Write the `EventCode` union for the resolved event type category.
///
/// Buttons of the key enum are appended as flat variants carrying their
/// numeric value as discriminant.
pub fn write_event_code<W: Write>(
    out: &mut W,
    event_types: &ResolvedCategory,
    resolved: &[ResolvedCategory],
) -> io::Result<()> {
    let available: Vec<Category> = emitted(resolved).collect();

    write_enum_attributes(out)?;
    writeln!(out, "pub enum EventCode {{")?;
    for entry in &event_types.entries {
        match union_variant(entry, &available) {
            UnionVariant::Payload { name, payload } => {
                writeln!(out, "    {}({}),", name, payload.enum_name())?
            }
            UnionVariant::Unknown => writeln!(
                out,
                "    {} {{ event_type: u32, event_code: u32 }},",
                rules::UNKNOWN_EVENT_VARIANT
            )?,
            UnionVariant::Bare { name } => writeln!(out, "    {},", name)?,
        }
    }

    let buttons = flat_buttons(event_types, resolved);
    for button in &buttons {
        writeln!(out, "    {} = {},", button.name, button.value)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

/// Button entries that can be appended to the union.
///
/// Variants before them take the implicit discriminants `0..n`, so a button
/// value below `n` would clash; in that case none are appended.
fn flat_buttons<'a>(
    event_types: &ResolvedCategory,
    resolved: &'a [ResolvedCategory],
) -> Vec<&'a CanonicalEntry> {
    let Some(keys) = resolved.iter().find(|r| r.category == Category::Key) else {
        return Vec::new();
    };

    let buttons: Vec<&CanonicalEntry> = keys.buttons().collect();
    let implicit = event_types.entries.len() as u64;
    if let Some(low) = buttons.iter().find(|b| u64::from(b.value) < implicit) {
        log::warn!(
            "{} = {:#x} clashes with EventCode discriminants, leaving buttons out of EventCode",
            low.name,
            low.value
        );
        return Vec::new();
    }
    buttons
}
