//! Compact storage container types
//!
//! This module provides containers that trade access speed for memory
//! density, intended to be embedded by the million inside larger arrays.
//!
//! ## Containers
//!
//! - **`BitFieldArray<V, BITS, N>`** - Fixed array of N packed fields of
//!   exactly BITS bits each, no per-element padding
//! - **`LabelledMap<V, L, N, M>`** - Sparse label-to-value map over a
//!   bounded label universe, stored in a chain of compact blocks
//!
//! ## Companion utilities
//!
//! - **`optimal_block_capacities`** - Advisory search for the map block
//!   capacities minimizing expected memory usage under an occupancy model
//!
//! ## Design Principles
//!
//! - Memory density first: packed labels, pointer-footprint slack reuse,
//!   lazy block allocation
//! - Single-threaded value types, no internal locking
//! - Consistent error handling via `LabelPackError`

mod bit_field_array;
mod bits;
mod labelled_map;
mod tuning;

pub use bit_field_array::{BitFieldArray, Iter as BitFieldIter, IterMut as BitFieldIterMut, Slot};
pub use labelled_map::{Iter as LabelledMapIter, IterMut as LabelledMapIterMut, Label, LabelledMap};
pub use tuning::{optimal_block_capacities, MemoryCostModel};
