//! Shared helpers for engine integration tests
//!
//! Reference oracles to compare engine results against, plus inspectors
//! that check structural invariants from the public views.

#![allow(dead_code)]

pub mod inspect;
pub mod oracles;

pub use inspect::{assert_avl_balanced, assert_symmetric, events_of_kind, recomputed_height};
pub use oracles::{all_pairs_distances, kruskal_component_weight};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG so failures reproduce
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
