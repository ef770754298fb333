// Evcodegen Enum & Lookup Emitter
// Per category: enum, alias constants, code lookup and name parser

use std::io::{self, Write};

use crate::category::Category;
use crate::resolve::ResolvedCategory;
use crate::rules;

use super::write_enum_attributes;

/// Write all four artifacts for one category
pub fn write_category<W: Write>(out: &mut W, category: &ResolvedCategory) -> io::Result<()> {
    write_enum(out, category)?;
    write_aliases(out, category)?;
    write_lookup_fn(out, category)?;
    write_from_str(out, category)
}

fn write_enum<W: Write>(out: &mut W, category: &ResolvedCategory) -> io::Result<()> {
    write_enum_attributes(out)?;
    writeln!(out, "pub enum {} {{", category.enum_name())?;
    for entry in &category.entries {
        // The sentinel keeps its reserved value as discriminant so it can't
        // collide with a real event type.
        writeln!(out, "    {} = {},", entry.variant(), entry.value)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_aliases<W: Write>(out: &mut W, category: &ResolvedCategory) -> io::Result<()> {
    if !category.has_aliases() {
        return Ok(());
    }

    let enum_name = category.enum_name();
    writeln!(out, "impl {} {{", enum_name)?;
    for entry in &category.entries {
        for alias in &entry.aliases {
            writeln!(
                out,
                "    pub const {}: {} = {}::{};",
                alias,
                enum_name,
                enum_name,
                entry.variant()
            )?;
        }
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_lookup_fn<W: Write>(out: &mut W, category: &ResolvedCategory) -> io::Result<()> {
    let enum_name = category.enum_name();
    writeln!(
        out,
        "pub fn {}(code: u32) -> Option<{}> {{",
        category.category.lookup_fn_name(),
        enum_name
    )?;
    writeln!(out, "    match code {{")?;
    for entry in category.entries.iter().filter(|e| !e.is_sentinel()) {
        writeln!(
            out,
            "        {} => Some({}::{}),",
            entry.value,
            enum_name,
            entry.variant()
        )?;
    }
    if category.category == Category::Ev && category.sentinel().is_some() {
        writeln!(
            out,
            "        c if c < {} => Some({}::{}),",
            rules::UNKNOWN_EVENT_CODE_LIMIT,
            enum_name,
            rules::UNKNOWN_EVENT_VARIANT
        )?;
    }
    writeln!(out, "        _ => None,")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_from_str<W: Write>(out: &mut W, category: &ResolvedCategory) -> io::Result<()> {
    let enum_name = category.enum_name();
    writeln!(out, "impl std::str::FromStr for {} {{", enum_name)?;
    writeln!(out, "    type Err = ParseCodeError;")?;
    writeln!(out)?;
    writeln!(out, "    fn from_str(s: &str) -> Result<Self, Self::Err> {{")?;
    writeln!(out, "        match s {{")?;
    for entry in category.entries.iter().filter(|e| !e.is_sentinel()) {
        writeln!(
            out,
            "            \"{}\" => Ok({}::{}),",
            entry.name, enum_name, entry.name
        )?;
    }
    writeln!(out, "            _ => Err(ParseCodeError),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}
