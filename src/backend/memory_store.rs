use std::cell::RefCell;
use std::collections::HashMap;

use crate::backend::interface::Storage;
use crate::model::LedgerResult;

/// Storage that lives only as long as the value.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
