use std::io;

use crate::model::{Ledger, LedgerResult};

/// Key under which the ledger is persisted.
pub const LEDGER_KEY: &str = "expenses";

/// A flat string key-value store, in the manner of browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;
    fn remove(&self, key: &str) -> LedgerResult<()>;
}

/// Loads and persists a [`Ledger`] through any [`Storage`] backend.
pub struct LedgerStore<S: Storage> {
    storage: S
}

impl<S: Storage> LedgerStore<S> {
    pub fn new(storage: S) -> LedgerStore<S> {
        LedgerStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn try_load(&self) -> LedgerResult<Option<Ledger>> {
        let raw = match self.storage.get(LEDGER_KEY)? {
            Some(raw) => raw,
            None => return Ok(None)
        };
        let ledger = serde_json::from_str(&raw)?;
        return Ok(Some(ledger));
    }

    /// Reads the stored ledger. Never fails: a missing, unreadable or
    /// malformed value gives an empty ledger.
    pub fn load(&self) -> Ledger {
        match self.try_load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => {
                log::debug!("no stored ledger under {:?}, starting empty", LEDGER_KEY);
                Ledger::new()
            },
            Err(err) => {
                log::warn!("discarding stored ledger: {}", err);
                Ledger::new()
            }
        }
    }

    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        let raw = serde_json::to_string(ledger)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.storage.set(LEDGER_KEY, &raw)?;
        log::debug!("saved ledger ({} bytes)", raw.len());
        return Ok(());
    }

    pub fn clear(&self) -> LedgerResult<()> {
        self.storage.remove(LEDGER_KEY)
    }
}
