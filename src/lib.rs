//! ledwall-planner: resource planning for modular LED video walls
//!
//! Given a target screen size, a pixel pitch and the installation
//! environment, this library derives the cabinet grid, resolution, LAN ports,
//! controller, power draw, branch circuits and breaker sizes, and wires every
//! cabinet to a port and a circuit.
//!
//! # Architecture
//!
//! The library is a pure calculation engine. Rendering and report formatting
//! are left to callers; every result type is `serde::Serialize` so it can be
//! exported as-is.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`planning`] - Requirement calculation and cabinet distribution

pub mod config;
pub mod error;
pub mod planning;
