use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct SeqLenRecord {
    name: String,
    residues: u32,
}

/// Residue counts per target, loaded from a sequence-length table.
///
/// The table is tab-separated with no header: `name<TAB>residue-count`,
/// one target per line. Lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct SeqLenTable {
    lengths: HashMap<String, u32>,
}

impl SeqLenTable {
    pub fn load(path: &Path) -> Result<Self, SeqLenError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| SeqLenError::Table {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut lengths = HashMap::new();
        for result in reader.deserialize() {
            let record: SeqLenRecord = result.map_err(|e| SeqLenError::Table {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            if lengths.insert(record.name.clone(), record.residues).is_some() {
                warn!(
                    name = %record.name,
                    "Duplicate sequence-length entry; keeping the last one."
                );
            }
        }
        Ok(Self { lengths })
    }

    /// Residue count for `name`, if the table has an entry.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.lengths.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum SeqLenError {
    #[error("Sequence-length table error for '{path}': {source}")]
    Table { path: String, source: csv::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn table_is_loaded_and_queried_by_exact_name() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# casp10 lengths\nT0283\t112\nT0171\t84\n").unwrap();

        let table = SeqLenTable::load(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("T0283"), Some(112));
        assert_eq!(table.get("T0171"), Some(84));
        assert_eq!(table.get("T0283_17"), None);
    }

    #[test]
    fn malformed_count_is_a_table_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "T0283\tmany\n").unwrap();

        assert!(matches!(
            SeqLenTable::load(file.path()),
            Err(SeqLenError::Table { .. })
        ));
    }

    #[test]
    fn last_duplicate_entry_wins() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "T0283\t112\nT0283\t113\n").unwrap();

        let table = SeqLenTable::load(file.path()).unwrap();
        assert_eq!(table.get("T0283"), Some(113));
    }
}
