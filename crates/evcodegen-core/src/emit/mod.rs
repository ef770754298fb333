// Evcodegen Emitter
// Writes the resolved tables as Rust source

pub mod enums;
pub mod event_code;

use std::io::{self, Write};

use crate::category::Category;
use crate::resolve::{resolve_all, ResolvedCategory};
use crate::table::SymbolTables;

pub const GENERATED_MARKER: &str = "/* THIS FILE IS GENERATED, DO NOT EDIT */";

/// Write the full generated file for `tables`.
///
/// Categories are written in prefix priority order; buttons appear inside
/// the key enum and the `EventCode` union follows the event type block.
pub fn emit<W: Write>(tables: &SymbolTables, out: &mut W) -> io::Result<()> {
    let resolved = resolve_all(tables);
    write_prelude(out)?;

    for category in &resolved {
        log::debug!(
            "emitting {} ({} variants)",
            category.enum_name(),
            category.entries.len()
        );
        enums::write_category(out, category)?;

        if category.category == Category::Ev {
            event_code::write_event_code(out, category, &resolved)?;
        }
    }

    out.flush()
}

/// Emit into a `String`
pub fn emit_to_string(tables: &SymbolTables) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = emit(tables, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_prelude<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GENERATED_MARKER)?;
    writeln!(out)?;
    writeln!(out, "#[cfg(feature = \"serde\")]")?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "/// Error returned when parsing a name that is not a known code")?;
    writeln!(out, "#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub struct ParseCodeError;")?;
    writeln!(out)?;
    writeln!(out, "impl std::fmt::Display for ParseCodeError {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(\"no such variant\")")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl std::error::Error for ParseCodeError {{}}")?;
    writeln!(out)
}

/// Attributes shared by every generated enum
fn write_enum_attributes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(
        out,
        "#[cfg_attr(feature = \"serde\", derive(Serialize), derive(Deserialize))]"
    )?;
    writeln!(out, "#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]")?;
    writeln!(out, "#[repr(u32)]")
}

/// Names of the categories that produced an enum
fn emitted(resolved: &[ResolvedCategory]) -> impl Iterator<Item = Category> + '_ {
    resolved.iter().map(|r| r.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CategoryTables;

    fn emit_text(text: &str) -> String {
        let mut tables = CategoryTables::new();
        tables.scan_reader(text.as_bytes()).unwrap();
        emit_to_string(&tables.freeze())
    }

    #[test]
    fn test_prelude() {
        let out = emit_text("");
        assert!(out.starts_with(GENERATED_MARKER));
        assert!(out.contains("use serde::{Deserialize, Serialize};"));
        assert!(out.contains("pub struct ParseCodeError;"));
        assert!(!out.contains("pub enum"));
    }

    #[test]
    fn test_category_blocks_in_prefix_order() {
        let out = emit_text(
            "#define BUS_USB 0x03\n#define KEY_A 30\n#define EV_SYN 0x00\n#define REL_X 0x00\n",
        );
        let ev = out.find("pub enum EventType").unwrap();
        let code = out.find("pub enum EventCode").unwrap();
        let rel = out.find("pub enum EV_REL").unwrap();
        let key = out.find("pub enum EV_KEY").unwrap();
        let bus = out.find("pub enum BusType").unwrap();
        assert!(ev < code && code < rel && rel < key && key < bus);
    }

    #[test]
    fn test_no_standalone_button_enum() {
        let out = emit_text("#define BTN_LEFT 0x110\n");
        assert!(!out.contains("pub enum EV_BTN"));
        assert!(out.contains("pub enum EV_KEY"));
        assert!(out.contains("    BTN_LEFT = 272,"));
    }

    #[test]
    fn test_union_only_with_event_types() {
        let out = emit_text("#define KEY_A 30\n");
        assert!(!out.contains("EventCode"));
    }
}
