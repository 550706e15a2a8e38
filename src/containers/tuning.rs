//! Advisory search for the block capacities of a [`LabelledMap`]
//!
//! Picking N (first block capacity) and M (further block capacity) is a
//! memory trade-off that depends on how occupied the embedding array is
//! expected to be. This module models the expected per-site memory cost of
//! a `LabelledMap<V, L, N, M>` under a simple occupancy distribution and
//! searches for the `(N, M)` pair minimizing it. Advisory only, nothing
//! here is on the container hot path.
//!
//! The occupancy model has two parameters: `prob_no_data`, the probability
//! that a site stores nothing at all, and `prob_one_data`, the parameter of
//! the geometric distribution governing how many entries a non-empty site
//! stores (0.5 means one entry expected).
//!
//! [`LabelledMap`]: crate::LabelledMap

use crate::containers::labelled_map::label_bits;
use crate::error::{LabelPackError, Result};

/// Candidate capacities are searched on the grid `N in 0..=32, M in 2..=32`.
const SEARCH_LIMIT: usize = 32;

/// Approximation of the bookkeeping an allocator adds per heap block, in
/// bytes.
const ALLOC_OVERHEAD: usize = 8;

/// Expected per-site memory cost of a map under a geometric occupancy model
///
/// # Examples
///
/// ```rust
/// use labelpack::MemoryCostModel;
///
/// let model = MemoryCostModel::for_value::<f64>(256, 0.9, 0.5)?;
/// // A bigger next-block capacity costs more up front on overflow
/// assert!(model.cost(2, 8) > model.cost(2, 2));
/// # Ok::<(), labelpack::LabelPackError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MemoryCostModel {
    label_bits: usize,
    value_size: usize,
    pointer_size: usize,
    alloc_overhead: usize,
    prob_no_data: f64,
    prob_one_data: f64,
}

impl MemoryCostModel {
    /// Creates a model for a value type of `value_size` bytes over a label
    /// universe of `universe` labels
    ///
    /// # Errors
    ///
    /// `Configuration` if `universe == 0`, `prob_no_data` is outside
    /// `[0, 1)` or `prob_one_data` is outside `(0, 1]`.
    pub fn new(
        universe: usize,
        value_size: usize,
        prob_no_data: f64,
        prob_one_data: f64,
    ) -> Result<Self> {
        if universe == 0 {
            return Err(LabelPackError::configuration("empty label universe"));
        }
        if !(0.0..1.0).contains(&prob_no_data) {
            return Err(LabelPackError::configuration(format!(
                "prob_no_data must be in [0, 1), got {prob_no_data}"
            )));
        }
        if prob_one_data <= 0.0 || prob_one_data > 1.0 {
            return Err(LabelPackError::configuration(format!(
                "prob_one_data must be in (0, 1], got {prob_one_data}"
            )));
        }
        Ok(Self {
            label_bits: label_bits(universe),
            value_size,
            pointer_size: std::mem::size_of::<usize>(),
            alloc_overhead: ALLOC_OVERHEAD,
            prob_no_data,
            prob_one_data,
        })
    }

    /// Convenience constructor taking the value type as a parameter
    pub fn for_value<V>(universe: usize, prob_no_data: f64, prob_one_data: f64) -> Result<Self> {
        Self::new(
            universe,
            std::mem::size_of::<V>(),
            prob_no_data,
            prob_one_data,
        )
    }

    /// Expected memory cost in bytes of one map with first block capacity
    /// `n` and next block capacity `m`
    ///
    /// The fixed part covers the embedded first block (packed labels plus
    /// n values plus the pointer-footprint slack); the variable part is the
    /// per-next-block cost weighted by the probability of overflowing n
    /// entries and by the expected number of further blocks under the
    /// geometric tail.
    pub fn cost(&self, n: usize, m: usize) -> f64 {
        debug_assert!(m >= 2);
        let q = 1.0 - self.prob_no_data;
        let tail = 1.0 - self.prob_one_data;

        let label_bytes = (self.label_bits * (n + 1)) as f64 / 8.0;
        let first_block = label_bytes + (self.value_size * (n + 1)) as f64;
        let next_block = (self.value_size * m + self.alloc_overhead + self.pointer_size) as f64;

        let expected_blocks = tail.powi(n as i32 + 1)
            * (1.0 + tail.powi(m as i32 - 1) / (1.0 - tail.powi(m as i32)));
        first_block + next_block * q * expected_blocks
    }
}

/// Searches the `(N, M)` pair minimizing the expected memory usage of a
/// `LabelledMap<V, L, N, M>` under the given occupancy distribution
///
/// Returns the recommended `(FirstBlockCapacity, NextBlockCapacity)`;
/// `NextBlockCapacity >= 2` always holds (structural minimum of the map).
/// The search is numeric over a bounded grid, not a closed form.
///
/// # Errors
///
/// `Configuration` on an empty universe or probabilities outside their
/// domains, as for [`MemoryCostModel::new`].
///
/// # Examples
///
/// ```rust
/// use labelpack::optimal_block_capacities;
///
/// let (n, m) = optimal_block_capacities::<f64>(256, 0.9, 0.5)?;
/// assert!(m >= 2);
/// # Ok::<(), labelpack::LabelPackError>(())
/// ```
pub fn optimal_block_capacities<V>(
    universe: usize,
    prob_no_data: f64,
    prob_one_data: f64,
) -> Result<(usize, usize)> {
    let model = MemoryCostModel::for_value::<V>(universe, prob_no_data, prob_one_data)?;

    let n_limit = SEARCH_LIMIT.min(universe);
    let mut best = (0, 2);
    let mut best_cost = model.cost(0, 2);
    for n in 0..=n_limit {
        for m in 2..=SEARCH_LIMIT {
            let cost = model.cost(n, m);
            if cost < best_cost {
                best = (n, m);
                best_cost = cost;
            }
        }
    }

    log::debug!(
        "optimal block capacities for universe {}: N={}, M={} (expected {:.1} bytes/site)",
        universe,
        best.0,
        best.1,
        best_cost
    );
    Ok(best)
}
