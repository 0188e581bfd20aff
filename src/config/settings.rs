//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default, so an empty object `{}` is a complete
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::planning::Environment;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Engine constants and lookup tables.
    #[serde(default)]
    pub planning: PlanningConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.planning.validate()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(invalid(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }
}

/// Constants and lookup tables consumed by the planning engine.
///
/// Passed explicitly into [`crate::planning::RequirementCalculator`] so that
/// tables can be swapped without touching the calculation logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanningConfig {
    /// Cabinet panel width in mm.
    #[serde(default = "default_cabinet_width")]
    pub cabinet_width_mm: f64,

    /// Cabinet panel height in mm.
    #[serde(default = "default_cabinet_height")]
    pub cabinet_height_mm: f64,

    /// Hardware pixel ceiling of a single LAN output.
    #[serde(default = "default_max_pixels_per_port")]
    pub max_pixels_per_port: u64,

    /// Fraction of the port ceiling that may actually be used (0-1].
    #[serde(default = "default_safe_capacity")]
    pub safe_capacity_percentage: f64,

    /// Supply voltage in volts.
    #[serde(default = "default_supply_voltage")]
    pub supply_voltage: f64,

    /// Rated current of a branch circuit breaker in amps.
    #[serde(default = "default_circuit_breaker_amps")]
    pub circuit_breaker_amps: f64,

    /// Continuous-load derating applied to a branch circuit (0-1].
    #[serde(default = "default_safe_load_factor")]
    pub safe_load_factor: f64,

    /// Multiplier applied to the wall current before sizing the main breaker.
    #[serde(default = "default_breaker_margin")]
    pub main_breaker_margin: f64,

    /// Multiplier applied to a block's current before sizing its MCCB.
    #[serde(default = "default_breaker_margin")]
    pub block_breaker_margin: f64,

    /// Number of circuits grouped under one distribution block.
    #[serde(default = "default_circuits_per_block")]
    pub circuits_per_block: usize,

    /// Standard main breaker sizes in amps, ascending.
    #[serde(default = "default_main_breaker_sizes")]
    pub main_breaker_sizes: Vec<f64>,

    /// Standard MCCB sizes in amps, ascending.
    #[serde(default = "default_block_breaker_sizes")]
    pub block_breaker_sizes: Vec<f64>,

    /// Pixel pitches (mm) that may be requested, ascending.
    #[serde(default = "default_supported_pitches")]
    pub supported_pitches: Vec<f64>,

    /// Per-cabinet power draw by environment.
    #[serde(default)]
    pub power: PowerConfig,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            cabinet_width_mm: default_cabinet_width(),
            cabinet_height_mm: default_cabinet_height(),
            max_pixels_per_port: default_max_pixels_per_port(),
            safe_capacity_percentage: default_safe_capacity(),
            supply_voltage: default_supply_voltage(),
            circuit_breaker_amps: default_circuit_breaker_amps(),
            safe_load_factor: default_safe_load_factor(),
            main_breaker_margin: default_breaker_margin(),
            block_breaker_margin: default_breaker_margin(),
            circuits_per_block: default_circuits_per_block(),
            main_breaker_sizes: default_main_breaker_sizes(),
            block_breaker_sizes: default_block_breaker_sizes(),
            supported_pitches: default_supported_pitches(),
            power: PowerConfig::default(),
        }
    }
}

impl PlanningConfig {
    /// Pixel budget of one LAN port after derating.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Port ceilings are far below 2^52
    pub fn safe_pixels_per_port(&self) -> f64 {
        self.max_pixels_per_port as f64 * self.safe_capacity_percentage
    }

    /// Usable continuous current of one branch circuit.
    #[must_use]
    pub fn safe_circuit_amps(&self) -> f64 {
        self.circuit_breaker_amps * self.safe_load_factor
    }

    /// Returns true if `pitch` is one of the supported pitches.
    #[must_use]
    pub fn supports_pitch(&self, pitch: f64) -> bool {
        self.supported_pitches
            .iter()
            .any(|p| (p - pitch).abs() < PITCH_TOLERANCE)
    }

    /// Validates the planning constants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("cabinet_width_mm", self.cabinet_width_mm)?;
        require_positive("cabinet_height_mm", self.cabinet_height_mm)?;
        if self.max_pixels_per_port == 0 {
            return Err(invalid("max_pixels_per_port must be greater than zero"));
        }
        require_fraction("safe_capacity_percentage", self.safe_capacity_percentage)?;
        require_positive("supply_voltage", self.supply_voltage)?;
        require_positive("circuit_breaker_amps", self.circuit_breaker_amps)?;
        require_fraction("safe_load_factor", self.safe_load_factor)?;

        for (name, margin) in [
            ("main_breaker_margin", self.main_breaker_margin),
            ("block_breaker_margin", self.block_breaker_margin),
        ] {
            if !margin.is_finite() || margin < 1.0 {
                return Err(invalid(format!("{name} must be at least 1.0, got {margin}")));
            }
        }

        if self.circuits_per_block == 0 {
            return Err(invalid("circuits_per_block must be at least 1"));
        }

        require_ascending("main_breaker_sizes", &self.main_breaker_sizes)?;
        require_ascending("block_breaker_sizes", &self.block_breaker_sizes)?;
        require_ascending("supported_pitches", &self.supported_pitches)?;

        self.power.indoor.validate("power.indoor")?;
        self.power.outdoor.validate("power.outdoor")?;
        Ok(())
    }
}

/// Two pitches closer than this are treated as the same pitch.
pub(crate) const PITCH_TOLERANCE: f64 = 1e-6;

/// Per-cabinet power draw for each installation environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerConfig {
    /// Indoor cabinets.
    #[serde(default = "PowerSpec::indoor")]
    pub indoor: PowerSpec,

    /// Outdoor cabinets (higher brightness, higher draw).
    #[serde(default = "PowerSpec::outdoor")]
    pub outdoor: PowerSpec,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            indoor: PowerSpec::indoor(),
            outdoor: PowerSpec::outdoor(),
        }
    }
}

impl PowerConfig {
    /// Returns the power spec for an environment.
    #[must_use]
    pub const fn for_environment(&self, environment: Environment) -> PowerSpec {
        match environment {
            Environment::Indoor => self.indoor,
            Environment::Outdoor => self.outdoor,
        }
    }
}

/// Peak and average draw of a single cabinet, in watts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerSpec {
    /// Peak (full white) draw.
    pub peak_watts: f64,
    /// Typical average draw.
    pub average_watts: f64,
}

impl PowerSpec {
    /// Creates a new power spec.
    #[must_use]
    pub const fn new(peak_watts: f64, average_watts: f64) -> Self {
        Self {
            peak_watts,
            average_watts,
        }
    }

    /// Default indoor cabinet draw.
    #[must_use]
    pub const fn indoor() -> Self {
        Self::new(250.0, 100.0)
    }

    /// Default outdoor cabinet draw.
    #[must_use]
    pub const fn outdoor() -> Self {
        Self::new(500.0, 200.0)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        require_positive(&format!("{name}.peak_watts"), self.peak_watts)?;
        require_positive(&format!("{name}.average_watts"), self.average_watts)?;
        if self.average_watts > self.peak_watts {
            return Err(invalid(format!(
                "{name}.average_watts ({}) exceeds peak_watts ({})",
                self.average_watts, self.peak_watts
            )));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_cabinet_width() -> f64 {
    500.0
}

const fn default_cabinet_height() -> f64 {
    1000.0
}

const fn default_max_pixels_per_port() -> u64 {
    650_000
}

const fn default_safe_capacity() -> f64 {
    0.85
}

const fn default_supply_voltage() -> f64 {
    220.0
}

const fn default_circuit_breaker_amps() -> f64 {
    20.0
}

const fn default_safe_load_factor() -> f64 {
    0.8
}

const fn default_breaker_margin() -> f64 {
    1.25
}

const fn default_circuits_per_block() -> usize {
    6
}

fn default_main_breaker_sizes() -> Vec<f64> {
    vec![
        20.0, 30.0, 40.0, 50.0, 60.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0,
        300.0, 350.0, 400.0, 500.0, 600.0, 800.0, 1000.0, 1200.0,
    ]
}

fn default_block_breaker_sizes() -> Vec<f64> {
    vec![32.0, 40.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0, 400.0]
}

fn default_supported_pitches() -> Vec<f64> {
    vec![1.2, 1.5, 1.9, 2.5, 2.9, 3.9, 4.8, 6.0, 8.0, 10.0]
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a positive number, got {value}")))
    }
}

fn require_fraction(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in (0, 1], got {value}")))
    }
}

fn require_ascending(name: &str, table: &[f64]) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(invalid(format!("{name} must not be empty")));
    }
    for value in table {
        require_positive(name, *value)?;
    }
    if table.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(invalid(format!("{name} must be strictly ascending")));
    }
    Ok(())
}
