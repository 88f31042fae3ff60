mod json_store;
mod memory_store;
mod interface;

pub use interface::{LedgerStore, Storage, LEDGER_KEY};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
