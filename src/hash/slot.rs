//! Hash table slots and table views

use serde::{Serialize, Serializer};

/// State of one table slot.
///
/// Serialized as `null`, `"DEL"` or the stored key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashSlot {
    #[default]
    Empty,
    /// Tombstone left by a removal; probing continues past it
    Deleted,
    Occupied(i64),
}

impl HashSlot {
    pub fn key(&self) -> Option<i64> {
        match self {
            Self::Occupied(key) => Some(*key),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Serialize for HashSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Deleted => serializer.serialize_str("DEL"),
            Self::Occupied(key) => serializer.serialize_i64(*key),
        }
    }
}

/// Whole-table view used by snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub table: Vec<HashSlot>,
    pub size: usize,
}
