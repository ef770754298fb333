// Evcodegen Category Tables
// Accumulates categorized definitions, grouping names that share a value

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::category::Category;
use crate::rules;
use crate::scanner::{self, Definition};
use crate::GenerateError;

/// Names sharing one value, canonical first
pub type NameList = SmallVec<[String; 2]>;

/// Value -> names, in order of first appearance
pub type ValueTable = IndexMap<u32, NameList>;

/// Where a definition ended up after categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First name seen for its value
    Canonical(Category),
    /// Appended to an existing value's names
    Alias(Category),
    Blacklisted,
    Uncategorized,
    /// Name was already recorded in its category
    Redefined(Category),
}

/// Mutable accumulator threaded through the scan of every input file
#[derive(Debug, Default)]
pub struct CategoryTables {
    tables: IndexMap<Category, ValueTable>,
    /// Every recorded name and its value
    seen: HashMap<String, u32>,
}

impl CategoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categorize one definition and record it
    pub fn insert(&mut self, def: Definition) -> Placement {
        if rules::is_blacklisted(&def.name) {
            log::trace!("dropping blacklisted {}", def.name);
            return Placement::Blacklisted;
        }

        let Some(category) = Category::classify(&def.name) else {
            log::trace!("no category for {}", def.name);
            return Placement::Uncategorized;
        };

        if let Some(&previous) = self.seen.get(&def.name) {
            if previous == def.value {
                log::trace!("{} defined again with the same value", def.name);
            } else {
                log::warn!(
                    "ignoring redefinition of {} = {:#x} in {}, keeping {:#x}",
                    def.name,
                    def.value,
                    category,
                    previous
                );
            }
            return Placement::Redefined(category);
        }
        self.seen.insert(def.name.clone(), def.value);

        let table = self.tables.entry(category).or_default();
        match table.get_mut(&def.value) {
            Some(names) => {
                log::trace!("{} aliases {} in {}", def.name, names[0], category);
                names.push(def.name);
                Placement::Alias(category)
            }
            None => {
                table.insert(def.value, smallvec::smallvec![def.name]);
                Placement::Canonical(category)
            }
        }
    }

    /// Scan every definition from `reader` into the tables
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let mut count = 0;
        for def in scanner::definitions(reader) {
            self.insert(def?);
            count += 1;
        }
        Ok(count)
    }

    /// Scan one header file into the tables.
    ///
    /// The file is closed before returning, whether or not reading failed.
    pub fn scan_file(&mut self, path: &Path) -> Result<usize, GenerateError> {
        let read_err = |source: std::io::Error| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let count = self.scan_reader(BufReader::new(file)).map_err(read_err)?;
        log::debug!("{}: {} integer definitions", path.display(), count);
        Ok(count)
    }

    /// Finish accumulation
    pub fn freeze(self) -> SymbolTables {
        SymbolTables {
            tables: self.tables,
        }
    }
}

/// Immutable snapshot of the categorized definitions
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    tables: IndexMap<Category, ValueTable>,
}

impl SymbolTables {
    /// Values and names of `category`, `None` if nothing matched it
    pub fn get(&self, category: Category) -> Option<&ValueTable> {
        self.tables.get(&category).filter(|t| !t.is_empty())
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Category that recorded `name`, if any
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.tables.iter().find_map(|(category, table)| {
            table
                .values()
                .any(|names| names.iter().any(|n| n == name))
                .then_some(*category)
        })
    }

    /// Total number of recorded names across all categories
    pub fn name_count(&self) -> usize {
        self.tables
            .values()
            .flat_map(|t| t.values())
            .map(|names| names.len())
            .sum()
    }
}
