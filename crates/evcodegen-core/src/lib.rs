// Evcodegen Core Library
// Compiles Linux input header constants into typed Rust symbol tables

pub mod category;
pub mod emit;
pub mod resolve;
pub mod rules;
pub mod scanner;
pub mod table;

use std::io::Write;
use std::path::{Path, PathBuf};

pub use category::Category;
pub use emit::{emit, emit_to_string};
pub use resolve::{resolve, resolve_all, CanonicalEntry, ResolvedCategory};
pub use scanner::{parse_define, Definition};
pub use table::{CategoryTables, Placement, SymbolTables};

/// Errors that abort generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated code: {0}")]
    Write(#[from] std::io::Error),

    #[error("category prefix {shorter} shadows {longer}")]
    PrefixOverlap {
        shorter: &'static str,
        longer: &'static str,
    },
}

/// Scan `paths` in order into one set of tables
pub fn scan_files<P: AsRef<Path>>(paths: &[P]) -> Result<SymbolTables, GenerateError> {
    Category::check_prefixes()?;

    let mut tables = CategoryTables::new();
    for path in paths {
        tables.scan_file(path.as_ref())?;
    }
    Ok(tables.freeze())
}

/// Read every header in `paths` (in order) and write the generated source to `out`
pub fn generate<P: AsRef<Path>, W: Write>(paths: &[P], out: &mut W) -> Result<(), GenerateError> {
    let tables = scan_files(paths)?;
    log::debug!("{} names categorized", tables.name_count());
    emit(&tables, out)?;
    Ok(())
}

/// Generate from header text already in memory
pub fn generate_from_str<W: Write>(text: &str, out: &mut W) -> Result<(), GenerateError> {
    Category::check_prefixes()?;

    let mut tables = CategoryTables::new();
    tables
        .scan_reader(text.as_bytes())
        .map_err(|source| GenerateError::Read {
            path: PathBuf::from("<memory>"),
            source,
        })?;
    emit(&tables.freeze(), out)?;
    Ok(())
}
