//! # Labelpack: Compact Storage Primitives for Sparse Labelled Data
//!
//! This crate provides bit-packed and block-chained storage primitives for
//! digital-geometry toolkits, where millions of tiny associative containers
//! are embedded inside image and cell-complex arrays and per-instance
//! memory overhead dominates every other cost.
//!
//! ## Key Features
//!
//! - **Bit-packed arrays**: fixed-capacity arrays of arbitrarily-sized bit
//!   fields with no per-element padding
//! - **Sparse labelled maps**: label-to-value maps over a bounded label
//!   universe, densely stored in a lazily-grown chain of compact blocks
//! - **Capacity tuning**: an advisory model to pick block capacities that
//!   minimize expected memory usage for a given occupancy distribution
//! - **Memory safety**: no raw-pointer reinterpretation; value bit patterns
//!   go through safe byte-level casts
//!
//! ## Quick Start
//!
//! ```rust
//! use labelpack::{BitFieldArray, LabelledMap, optimal_block_capacities};
//!
//! // 8 fields of 7 bits in 7 bytes of payload
//! let mut fields: BitFieldArray<u8, 7, 8> = BitFieldArray::new();
//! fields.set(2, 97)?;
//! assert_eq!(fields.get(2), Some(97));
//!
//! // A sparse map over 256 possible labels
//! let mut map: LabelledMap<f64, 256, 1, 3> = LabelledMap::new();
//! map.insert(42, 1.25)?;
//! assert_eq!(map.get(42), Some(&1.25));
//!
//! // Pick block capacities for a mostly-empty embedding array
//! let (n, m) = optimal_block_capacities::<f64>(256, 0.9, 0.5)?;
//! assert!(m >= 2);
//! # Ok::<(), labelpack::LabelPackError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;

// Re-export core types
pub use containers::{
    optimal_block_capacities, BitFieldArray, BitFieldIter, BitFieldIterMut, Label, LabelledMap,
    LabelledMapIter, LabelledMapIterMut, MemoryCostModel, Slot,
};
pub use error::{LabelPackError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing labelpack v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        init();
        assert!(VERSION.len() > 0);
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_re_exports() {
        let _array = BitFieldArray::<u8, 7, 8>::new();
        let _map = LabelledMap::<u32, 16, 1, 2>::new();
        let _err = LabelPackError::label_not_found(3);
        assert!(std::any::type_name::<Result<()>>().contains("LabelPackError"));
    }
}
