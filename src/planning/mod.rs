//! LED video-wall resource planning engine.
//!
//! Everything in this module is a pure function of the request and the
//! [`PlanningConfig`](crate::config::PlanningConfig); nothing is cached and
//! nothing is shared between calls.
//!
//! # Pipeline
//!
//! 1. [`calculator`] derives cabinets, resolution, ports, controller, power,
//!    circuits and the main breaker for one pitch
//! 2. [`distribution`] wires each cabinet to a port and a circuit along a
//!    serpentine cable path, balancing group sizes
//! 3. [`hierarchy`] groups circuits under distribution blocks and sizes
//!    their MCCBs
//! 4. [`planner`] ties the steps together and sweeps every supported pitch
//!
//! # Example
//!
//! ```
//! use ledwall_planner::planning::{Environment, PlanRequest, Planner};
//!
//! let planner = Planner::default();
//! let plan = planner
//!     .plan(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
//!     .unwrap();
//!
//! assert_eq!(plan.result.total_cabinets, 30);
//! assert_eq!(plan.result.lan_ports, 5);
//! assert_eq!(plan.blocks.len(), 1);
//! ```

pub mod calculator;
pub mod distribution;
pub mod environment;
pub mod hierarchy;
pub mod planner;
pub mod resolution;
pub mod selection;

pub use calculator::{CalculationResult, PlanRequest, RequirementCalculator};
pub use distribution::{CabinetCell, CabinetLayout, CircuitSummary, PortSummary};
pub use environment::Environment;
pub use hierarchy::DistributionBlock;
pub use planner::{Planner, WallPlan};
pub use resolution::ResolutionClass;
pub use selection::{smallest_at_least, SizeSelection};
