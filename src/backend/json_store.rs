use std::{fs, io, collections::BTreeMap, path::{Path, PathBuf}};

use crate::backend::interface::Storage;
use crate::model::LedgerResult;

type StoredValues = BTreeMap<String, String>;

/// Storage kept in a single JSON object file of string keys and values.
/// A file that does not exist yet holds no keys.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> JsonFileStore {
        JsonFileStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(&self) -> LedgerResult<StoredValues> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(StoredValues::new()),
            Err(err) => return Err(err.into())
        };
        if content.trim().is_empty() {
            return Ok(StoredValues::new());
        }
        let values = serde_json::from_str(&content)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        return Ok(values);
    }

    fn write_values(&self, values: &StoredValues) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, content)?;
        return Ok(());
    }
}

impl Storage for JsonFileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let mut values = self.read_values()?;
        return Ok(values.remove(key));
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut values = self.read_values()?;
        values.insert(key.to_owned(), value.to_owned());
        log::debug!("writing key {:?} to {}", key, self.path.display());
        self.write_values(&values)
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut values = self.read_values()?;
        if values.remove(key).is_some() {
            self.write_values(&values)?;
        }
        return Ok(());
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::{JsonFileStore, LedgerStore, Storage, LEDGER_KEY};
    use crate::model::{Entry, Ledger, Month, LedgerError};

    use std::fs;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[fixture]
    fn ledger() -> Ledger {
        let date = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        Ledger::new()
            .add_entry(Month::November, Entry::new(date, dec!(64.30), "Utilities", "Power").unwrap(), Some(dec!(3100))).unwrap()
    }

    #[rstest]
    fn missing_file_has_no_keys(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get(LEDGER_KEY).unwrap(), None);
    }

    #[rstest]
    fn set_creates_parent_dirs(dir: TempDir) {
        let path = dir.path().join("nested").join("storage.json");
        let store = JsonFileStore::new(&path);
        store.set("theme", "dark").unwrap();

        assert!(path.exists());
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_owned()));
    }

    #[rstest]
    fn keys_are_independent(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some("2".to_owned()));
    }

    #[rstest]
    fn corrupt_file_is_storage_error(dir: TempDir) {
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get(LEDGER_KEY), Err(LedgerError::Storage(..))));
    }

    #[rstest]
    fn ledger_round_trip_through_file(dir: TempDir, ledger: Ledger) {
        let path = dir.path().join("storage.json");
        LedgerStore::new(JsonFileStore::new(&path)).save(&ledger).unwrap();

        let reopened = LedgerStore::new(JsonFileStore::new(&path));
        assert_eq!(reopened.load(), ledger);
    }

    #[rstest]
    fn corrupt_file_loads_empty_ledger(dir: TempDir) {
        let path = dir.path().join("storage.json");
        fs::write(&path, "garbage").unwrap();
        let store = LedgerStore::new(JsonFileStore::new(&path));
        assert!(store.load().is_empty());
    }
}
