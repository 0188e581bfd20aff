//! Grouping of branch circuits under distribution blocks (MCCBs).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::planning::distribution::CircuitSummary;
use crate::planning::selection::smallest_at_least;

/// One distribution block and the circuits it feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBlock {
    /// Block id (1-based, in circuit order).
    pub id: usize,
    /// Ids of the member circuits.
    pub circuit_ids: Vec<usize>,
    /// Summed peak current of the member circuits (A).
    pub total_amps: f64,
    /// Selected MCCB rating (A).
    pub breaker_size: f64,
    /// True when `total_amps × margin` exceeds every standard MCCB size.
    pub at_ceiling: bool,
}

/// Groups consecutive circuits into blocks of `circuits_per_block`.
///
/// Each block's breaker is the smallest entry of `breaker_sizes` covering
/// `total_amps × margin`, saturating at the largest entry.
///
/// A `circuits_per_block` of zero is treated as one.
#[must_use]
pub fn group_circuits(
    circuits: &[CircuitSummary],
    circuits_per_block: usize,
    breaker_sizes: &[f64],
    margin: f64,
) -> Vec<DistributionBlock> {
    circuits
        .chunks(circuits_per_block.max(1))
        .enumerate()
        .map(|(index, chunk)| {
            let total_amps: f64 = chunk.iter().map(|c| c.amps).sum();
            let selection = smallest_at_least(breaker_sizes, total_amps * margin);
            if selection.at_ceiling {
                warn!(
                    block = index + 1,
                    total_amps,
                    breaker_size = selection.size,
                    "Distribution block load exceeds largest MCCB size"
                );
            }

            DistributionBlock {
                id: index + 1,
                circuit_ids: chunk.iter().map(|c| c.id).collect(),
                total_amps,
                breaker_size: selection.size,
                at_ceiling: selection.at_ceiling,
            }
        })
        .collect()
}
