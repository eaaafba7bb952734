//! Open-addressing hash table engine

mod slot;
mod table;

pub use slot::{HashSlot, TableView};
pub use table::{HashTableEngine, HashTableError, DEFAULT_CAPACITY};
