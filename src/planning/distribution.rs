//! Balanced assignment of cabinets to LAN ports and branch circuits.
//!
//! Cabinets are first ordered along a serpentine cable path (see
//! [`snake_index`]), then that sequence is cut into consecutive runs whose
//! lengths differ by at most one (see [`assign_balanced`]). Each run becomes
//! one port or one circuit, so neighbouring cabinets share a group and no
//! group carries more than one cabinet above any other.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// A cabinet position in the wall and the groups it is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetCell {
    /// Column, 0 at the left.
    pub x: usize,
    /// Row, 0 at the top.
    pub y: usize,
    /// Position along the serpentine cable path.
    pub snake_index: usize,
    /// Assigned LAN port (0-based).
    pub port_id: usize,
    /// Assigned branch circuit (0-based).
    pub circuit_id: usize,
}

/// The wired grid together with the group sizes it was cut into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetLayout {
    /// Every cabinet, row by row.
    pub cells: Vec<CabinetCell>,
    /// Cabinets per LAN port, indexed by port id.
    pub port_counts: Vec<usize>,
    /// Cabinets per branch circuit, indexed by circuit id.
    pub circuit_counts: Vec<usize>,
}

/// Load carried by one LAN port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortSummary {
    /// Port id (0-based, matches [`CabinetCell::port_id`]).
    pub id: usize,
    /// Cabinets on this port.
    pub cabinet_count: usize,
    /// Pixels driven by this port.
    pub pixel_count: u64,
    /// Pixel load relative to the port's hardware ceiling, in percent.
    pub load_percentage: f64,
}

/// Load carried by one branch circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSummary {
    /// Circuit id (0-based, matches [`CabinetCell::circuit_id`]).
    pub id: usize,
    /// Cabinets on this circuit.
    pub cabinet_count: usize,
    /// Peak draw (W).
    pub watts: f64,
    /// Peak current at the supply voltage (A).
    pub amps: f64,
}

/// Splits `total_items` sequential items across `group_count` groups.
///
/// Returns the group id of every item. The first
/// `total_items % group_count` groups receive one extra item, so group sizes
/// differ by at most one. Items of the same group are contiguous.
///
/// # Errors
///
/// Returns [`PlanError::EmptyGroupCount`] when `group_count` is zero.
///
/// # Examples
///
/// ```
/// use ledwall_planner::planning::distribution::assign_balanced;
///
/// let groups = assign_balanced(11, 4).unwrap();
/// assert_eq!(groups, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3]);
/// ```
pub fn assign_balanced(total_items: usize, group_count: usize) -> PlanResult<Vec<usize>> {
    if group_count == 0 {
        return Err(PlanError::EmptyGroupCount { items: total_items });
    }

    let base = total_items / group_count;
    let extra = total_items % group_count;

    let mut assignments = Vec::with_capacity(total_items);
    for group in 0..group_count {
        let size = if group < extra { base + 1 } else { base };
        assignments.extend(std::iter::repeat(group).take(size));
    }
    Ok(assignments)
}

/// Position of cabinet `(x, y)` along the serpentine cable path.
///
/// The path runs column by column: even columns top to bottom, odd columns
/// bottom to top. Over a `cabinets_width × cabinets_height` grid this is a
/// bijection onto `0..cabinets_width * cabinets_height`.
#[must_use]
pub fn snake_index(x: usize, y: usize, cabinets_width: usize, cabinets_height: usize) -> usize {
    debug_assert!(x < cabinets_width && y < cabinets_height);

    let offset = if x % 2 == 0 {
        y
    } else {
        cabinets_height - 1 - y
    };
    x * cabinets_height + offset
}

/// Counts how many items each group received.
#[must_use]
pub fn group_counts(assignments: &[usize], group_count: usize) -> Vec<usize> {
    let mut counts = vec![0; group_count];
    for &group in assignments {
        if let Some(count) = counts.get_mut(group) {
            *count += 1;
        }
    }
    counts
}

/// Wires every cabinet of the grid to a port and a circuit.
///
/// Cells are returned row by row, left to right, which is the order a grid
/// renderer walks them. The per-group counts come from the same assignment
/// that produced the cells.
///
/// # Errors
///
/// Returns [`PlanError::EmptyGroupCount`] when the grid is non-empty and
/// `lan_ports` or `circuits` is zero.
pub fn layout_cabinets(
    cabinets_width: usize,
    cabinets_height: usize,
    lan_ports: usize,
    circuits: usize,
) -> PlanResult<CabinetLayout> {
    let total = cabinets_width * cabinets_height;
    let port_assignments = assign_balanced(total, lan_ports)?;
    let circuit_assignments = assign_balanced(total, circuits)?;

    let mut cells = Vec::with_capacity(total);
    for y in 0..cabinets_height {
        for x in 0..cabinets_width {
            let index = snake_index(x, y, cabinets_width, cabinets_height);
            cells.push(CabinetCell {
                x,
                y,
                snake_index: index,
                port_id: port_assignments[index],
                circuit_id: circuit_assignments[index],
            });
        }
    }
    Ok(CabinetLayout {
        cells,
        port_counts: group_counts(&port_assignments, lan_ports),
        circuit_counts: group_counts(&circuit_assignments, circuits),
    })
}

/// Builds per-port load summaries from per-port cabinet counts.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Pixel counts are far below 2^52
pub fn port_summaries(
    cabinet_counts: &[usize],
    pixels_per_cabinet: u64,
    max_pixels_per_port: u64,
) -> Vec<PortSummary> {
    cabinet_counts
        .iter()
        .enumerate()
        .map(|(id, &cabinet_count)| {
            let pixel_count = (cabinet_count as u64).saturating_mul(pixels_per_cabinet);
            PortSummary {
                id,
                cabinet_count,
                pixel_count,
                load_percentage: pixel_count as f64 / max_pixels_per_port as f64 * 100.0,
            }
        })
        .collect()
}

/// Builds per-circuit load summaries from per-circuit cabinet counts.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Cabinet counts are small
pub fn circuit_summaries(
    cabinet_counts: &[usize],
    watts_per_cabinet: f64,
    supply_voltage: f64,
) -> Vec<CircuitSummary> {
    cabinet_counts
        .iter()
        .enumerate()
        .map(|(id, &cabinet_count)| {
            let watts = cabinet_count as f64 * watts_per_cabinet;
            CircuitSummary {
                id,
                cabinet_count,
                watts,
                amps: watts / supply_voltage,
            }
        })
        .collect()
}
