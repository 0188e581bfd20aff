//! Requirement calculation for a single wall at a single pixel pitch.
//!
//! The calculator turns `(width, height, pitch, environment)` into a complete
//! [`CalculationResult`]: cabinet grid, resolution, LAN ports and controller,
//! power draw, branch circuits and the main breaker.
//!
//! # Capacity Rules
//!
//! - Cabinet counts round up, so a wall is never under-provisioned
//! - A LAN port is loaded to at most `max_pixels_per_port × safe_capacity_percentage`
//! - A branch circuit is loaded to at most `circuit_breaker_amps × safe_load_factor`
//! - Each port and circuit carries at least one cabinet, even when a single
//!   cabinet exceeds its budget
//! - The main breaker is the smallest standard size covering the peak current
//!   times `main_breaker_margin`

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{PlanningConfig, PITCH_TOLERANCE};
use crate::error::{PlanError, PlanResult};
use crate::planning::environment::Environment;
use crate::planning::resolution::ResolutionClass;
use crate::planning::selection::{controller_units, select_controller, smallest_at_least};

/// Input to a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Target screen width (mm).
    pub width_mm: f64,
    /// Target screen height (mm).
    pub height_mm: f64,
    /// Pixel pitch (mm).
    pub pitch: f64,
    /// Installation environment.
    pub environment: Environment,
}

impl PlanRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(width_mm: f64, height_mm: f64, pitch: f64, environment: Environment) -> Self {
        Self {
            width_mm,
            height_mm,
            pitch,
            environment,
        }
    }
}

/// Complete resource requirement for one wall at one pitch.
///
/// Invariants: `total_cabinets == cabinets_width * cabinets_height` and
/// `total_pixels == resolution_width * resolution_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Pixel pitch (mm).
    pub pitch: f64,
    /// Installation environment.
    pub environment: Environment,
    /// Requested width (mm).
    pub width_mm: f64,
    /// Requested height (mm).
    pub height_mm: f64,

    /// Horizontal resolution (px).
    pub resolution_width: u64,
    /// Vertical resolution (px).
    pub resolution_height: u64,
    /// Total pixel count.
    pub total_pixels: u64,
    /// Broadcast resolution tier.
    pub resolution_class: ResolutionClass,

    /// Cabinet columns.
    pub cabinets_width: usize,
    /// Cabinet rows.
    pub cabinets_height: usize,
    /// Total cabinets.
    pub total_cabinets: usize,
    /// Pixels carried by one cabinet at this pitch.
    pub pixels_per_cabinet: u64,

    /// Cabinets one LAN port may carry.
    pub max_cabinets_per_port: usize,
    /// Required LAN ports.
    pub lan_ports: usize,
    /// Controller model name.
    pub controller: String,
    /// Number of controller units of that model.
    pub controller_units: usize,

    /// Peak power draw (W).
    pub peak_power_watts: f64,
    /// Average power draw (W).
    pub avg_power_watts: f64,
    /// Peak current at the supply voltage (A).
    pub supply_amps: f64,
    /// Cabinets one branch circuit may carry.
    pub max_cabinets_per_circuit: usize,
    /// Required branch circuits.
    pub circuits: usize,
    /// Current the main breaker must cover, margin included (A).
    pub required_main_amps: f64,
    /// Selected main breaker rating (A).
    pub main_breaker_amps: f64,
    /// True when `required_main_amps` exceeds every standard size.
    pub main_breaker_at_ceiling: bool,

    /// Screen area (m²).
    pub area_sq_m: f64,
}

/// Computes [`CalculationResult`]s from a fixed [`PlanningConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequirementCalculator {
    config: PlanningConfig,
}

impl RequirementCalculator {
    /// Creates a calculator using the given constants and tables.
    #[must_use]
    pub const fn new(config: PlanningConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Rejects requests with non-positive dimensions or an unsupported pitch.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidDimension`] or [`PlanError::UnsupportedPitch`].
    pub fn validate(&self, request: &PlanRequest) -> PlanResult<()> {
        validate_dimension("width", request.width_mm)?;
        validate_dimension("height", request.height_mm)?;

        if !request.pitch.is_finite() || !self.config.supports_pitch(request.pitch) {
            return Err(PlanError::UnsupportedPitch {
                pitch: request.pitch,
                supported: self
                    .config
                    .supported_pitches
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(())
    }

    /// Calculates the full requirement for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails [`Self::validate`]. No partial
    /// result is ever produced.
    pub fn calculate(&self, request: &PlanRequest) -> PlanResult<CalculationResult> {
        self.validate(request)?;

        let cfg = &self.config;
        let PlanRequest {
            width_mm,
            height_mm,
            pitch,
            environment,
        } = *request;

        let too_large = || PlanError::WallTooLarge {
            width_mm,
            height_mm,
        };

        // Cabinet grid, rounded up
        let cabinets_width =
            ceil_count(width_mm / cfg.cabinet_width_mm).ok_or_else(too_large)?;
        let cabinets_height =
            ceil_count(height_mm / cfg.cabinet_height_mm).ok_or_else(too_large)?;
        let total_cabinets = cabinets_width
            .checked_mul(cabinets_height)
            .ok_or_else(too_large)?;

        let resolution_width = round_pixels(width_mm / pitch).ok_or_else(too_large)?;
        let resolution_height = round_pixels(height_mm / pitch).ok_or_else(too_large)?;
        let total_pixels = resolution_width
            .checked_mul(resolution_height)
            .ok_or_else(too_large)?;
        let resolution_class = ResolutionClass::classify(resolution_width, resolution_height);

        let pixels_per_cabinet = self.pixels_per_cabinet(pitch);

        // Network
        #[allow(clippy::cast_precision_loss)] // Per-cabinet pixel counts are small
        let max_cabinets_per_port =
            floor_count(cfg.safe_pixels_per_port() / pixels_per_cabinet as f64).max(1);
        let lan_ports = total_cabinets.div_ceil(max_cabinets_per_port);
        let controller = select_controller(lan_ports).to_string();

        // Power
        let power = cfg.power.for_environment(environment);
        #[allow(clippy::cast_precision_loss)] // Cabinet counts are small
        let cabinets = total_cabinets as f64;
        let peak_power_watts = cabinets * power.peak_watts;
        let avg_power_watts = cabinets * power.average_watts;
        let supply_amps = peak_power_watts / cfg.supply_voltage;

        // Branch circuits: safe amps / (peak watts / volts)
        let max_cabinets_per_circuit =
            floor_count(cfg.safe_circuit_amps() * cfg.supply_voltage / power.peak_watts).max(1);
        let circuits = total_cabinets.div_ceil(max_cabinets_per_circuit);

        let required_main_amps = supply_amps * cfg.main_breaker_margin;
        let main_breaker = smallest_at_least(&cfg.main_breaker_sizes, required_main_amps);
        if main_breaker.at_ceiling {
            warn!(
                required_amps = required_main_amps,
                breaker_amps = main_breaker.size,
                "Main breaker requirement exceeds largest standard size"
            );
        }

        let area_sq_m = (width_mm / 1000.0) * (height_mm / 1000.0);

        debug!(
            pitch,
            %environment,
            total_cabinets,
            total_pixels,
            lan_ports,
            circuits,
            "Calculated wall requirements"
        );

        Ok(CalculationResult {
            pitch,
            environment,
            width_mm,
            height_mm,
            resolution_width,
            resolution_height,
            total_pixels,
            resolution_class,
            cabinets_width,
            cabinets_height,
            total_cabinets,
            pixels_per_cabinet,
            max_cabinets_per_port,
            lan_ports,
            controller,
            controller_units: controller_units(lan_ports),
            peak_power_watts,
            avg_power_watts,
            supply_amps,
            max_cabinets_per_circuit,
            circuits,
            required_main_amps,
            main_breaker_amps: main_breaker.size,
            main_breaker_at_ceiling: main_breaker.at_ceiling,
            area_sq_m,
        })
    }

    /// Pixels carried by one cabinet, derived from the cabinet's physical size.
    ///
    /// Each side is rounded independently and clamped to at least one pixel,
    /// so the result is never zero. Saturates at `u64::MAX`.
    #[must_use]
    pub fn pixels_per_cabinet(&self, pitch: f64) -> u64 {
        let side = |extent_mm: f64| round_pixels(extent_mm / pitch).map_or(u64::MAX, |p| p.max(1));
        side(self.config.cabinet_width_mm).saturating_mul(side(self.config.cabinet_height_mm))
    }

    /// Per-cabinet peak current for an environment (A).
    #[must_use]
    pub fn amps_per_cabinet(&self, environment: Environment) -> f64 {
        self.config.power.for_environment(environment).peak_watts / self.config.supply_voltage
    }
}

/// Returns true if two pitches refer to the same supported value.
#[must_use]
pub fn same_pitch(a: f64, b: f64) -> bool {
    (a - b).abs() < PITCH_TOLERANCE
}

fn validate_dimension(name: &'static str, value: f64) -> PlanResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidDimension { name, value })
    }
}

/// Never returns zero: any positive extent needs at least one cabinet.
/// `None` when the count does not fit in `usize`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)] // Range-checked before the cast
fn ceil_count(ratio: f64) -> Option<usize> {
    let count = ratio.ceil().max(1.0);
    (count < usize::MAX as f64).then_some(count as usize)
}

/// Capacities round down, so a group is never loaded past its budget.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Saturates on huge budgets
fn floor_count(ratio: f64) -> usize {
    ratio.floor().max(0.0) as usize
}

/// `None` when the count does not fit in `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)] // Range-checked before the cast
fn round_pixels(ratio: f64) -> Option<u64> {
    let count = ratio.round().max(0.0);
    (count < u64::MAX as f64).then_some(count as u64)
}
