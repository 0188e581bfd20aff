//! Table lookups shared by the breaker sizing and controller selection.

use serde::{Deserialize, Serialize};

/// Result of picking a size from a standard table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSelection {
    /// Selected table entry.
    pub size: f64,
    /// True when no entry met the target and the largest one was returned.
    pub at_ceiling: bool,
}

/// Returns the first entry of an ascending `table` that is at least `target`.
///
/// Saturates at the last entry when the target exceeds every entry; this is
/// reported through [`SizeSelection::at_ceiling`] rather than as an error.
/// An empty table yields a zero size at the ceiling.
#[must_use]
pub fn smallest_at_least(table: &[f64], target: f64) -> SizeSelection {
    table.iter().find(|&&size| size >= target).map_or_else(
        || SizeSelection {
            size: table.last().copied().unwrap_or(0.0),
            at_ceiling: true,
        },
        |&size| SizeSelection {
            size,
            at_ceiling: false,
        },
    )
}

/// Number of LAN ports driven by the largest single controller.
pub const PORTS_PER_LARGEST_CONTROLLER: usize = 16;

/// Picks the controller model that can drive `lan_ports` outputs.
///
/// Walls needing more than [`PORTS_PER_LARGEST_CONTROLLER`] ports get
/// "Multiple VX16s"; see [`controller_units`] for the unit count.
#[must_use]
pub const fn select_controller(lan_ports: usize) -> &'static str {
    match lan_ports {
        0 | 1 => "TB20",
        2 => "MCTRL300",
        3 | 4 => "MCTRL600",
        p if p <= PORTS_PER_LARGEST_CONTROLLER => "VX16s",
        _ => "Multiple VX16s",
    }
}

/// Number of controller units needed for `lan_ports` outputs.
#[must_use]
pub const fn controller_units(lan_ports: usize) -> usize {
    if lan_ports <= PORTS_PER_LARGEST_CONTROLLER {
        1
    } else {
        lan_ports.div_ceil(PORTS_PER_LARGEST_CONTROLLER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [f64; 4] = [20.0, 30.0, 40.0, 50.0];

    #[test]
    fn picks_first_entry_at_or_above_target() {
        assert_eq!(
            smallest_at_least(&TABLE, 30.0),
            SizeSelection {
                size: 30.0,
                at_ceiling: false
            }
        );
        assert!((smallest_at_least(&TABLE, 30.01).size - 40.0).abs() < f64::EPSILON);
        assert!((smallest_at_least(&TABLE, 0.0).size - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn saturates_at_largest_entry() {
        let selection = smallest_at_least(&TABLE, 51.0);
        assert!((selection.size - 50.0).abs() < f64::EPSILON);
        assert!(selection.at_ceiling);
    }

    #[test]
    fn exact_maximum_is_not_at_ceiling() {
        assert!(!smallest_at_least(&TABLE, 50.0).at_ceiling);
    }

    #[test]
    fn empty_table_saturates_to_zero() {
        let selection = smallest_at_least(&[], 10.0);
        assert!(selection.at_ceiling);
        assert!(selection.size.abs() < f64::EPSILON);
    }

    #[test]
    fn controller_thresholds() {
        assert_eq!(select_controller(1), "TB20");
        assert_eq!(select_controller(2), "MCTRL300");
        assert_eq!(select_controller(3), "MCTRL600");
        assert_eq!(select_controller(4), "MCTRL600");
        assert_eq!(select_controller(5), "VX16s");
        assert_eq!(select_controller(16), "VX16s");
        assert_eq!(select_controller(17), "Multiple VX16s");
    }

    #[test]
    fn controller_unit_count() {
        assert_eq!(controller_units(1), 1);
        assert_eq!(controller_units(16), 1);
        assert_eq!(controller_units(17), 2);
        assert_eq!(controller_units(48), 3);
    }
}
