//! Composition of the calculator, distribution and grouping steps.
//!
//! [`Planner::compare`] sweeps every supported pitch for one wall, and
//! [`Planner::plan`] produces the full wiring plan for a single pitch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PlanningConfig;
use crate::error::PlanResult;
use crate::planning::calculator::{
    same_pitch, CalculationResult, PlanRequest, RequirementCalculator,
};
use crate::planning::distribution::{
    circuit_summaries, layout_cabinets, port_summaries, CabinetCell, CircuitSummary, PortSummary,
};
use crate::planning::environment::Environment;
use crate::planning::hierarchy::{group_circuits, DistributionBlock};

/// Everything needed to render or export one wall at one pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPlan {
    /// Requirement summary.
    pub result: CalculationResult,
    /// Cabinet grid, row by row.
    pub cells: Vec<CabinetCell>,
    /// Per-port load.
    pub ports: Vec<PortSummary>,
    /// Per-circuit load.
    pub circuits: Vec<CircuitSummary>,
    /// Circuits grouped under distribution blocks.
    pub blocks: Vec<DistributionBlock>,
}

/// Runs the planning engine against one configuration.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    calculator: RequirementCalculator,
}

impl Planner {
    /// Creates a planner using the given constants and tables.
    #[must_use]
    pub const fn new(config: PlanningConfig) -> Self {
        Self {
            calculator: RequirementCalculator::new(config),
        }
    }

    /// Returns the underlying calculator.
    #[must_use]
    pub const fn calculator(&self) -> &RequirementCalculator {
        &self.calculator
    }

    /// Calculates the wall at every supported pitch, in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PlanError::InvalidDimension`] if either
    /// dimension is not positive.
    pub fn compare(
        &self,
        width_mm: f64,
        height_mm: f64,
        environment: Environment,
    ) -> PlanResult<Vec<CalculationResult>> {
        let results = self
            .calculator
            .config()
            .supported_pitches
            .iter()
            .map(|&pitch| {
                self.calculator
                    .calculate(&PlanRequest::new(width_mm, height_mm, pitch, environment))
            })
            .collect::<PlanResult<Vec<_>>>()?;

        info!(
            width_mm,
            height_mm,
            %environment,
            pitches = results.len(),
            "Compared supported pitches"
        );
        Ok(results)
    }

    /// Builds the full wiring plan for one request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected by
    /// [`RequirementCalculator::validate`].
    pub fn plan(&self, request: &PlanRequest) -> PlanResult<WallPlan> {
        let result = self.calculator.calculate(request)?;
        let config = self.calculator.config();

        let layout = layout_cabinets(
            result.cabinets_width,
            result.cabinets_height,
            result.lan_ports,
            result.circuits,
        )?;
        let cells = layout.cells;

        let ports = port_summaries(
            &layout.port_counts,
            result.pixels_per_cabinet,
            config.max_pixels_per_port,
        );
        let watts_per_cabinet = config.power.for_environment(result.environment).peak_watts;
        let circuits = circuit_summaries(&layout.circuit_counts, watts_per_cabinet, config.supply_voltage);
        let blocks = group_circuits(
            &circuits,
            config.circuits_per_block,
            &config.block_breaker_sizes,
            config.block_breaker_margin,
        );

        debug!(
            cells = cells.len(),
            ports = ports.len(),
            circuits = circuits.len(),
            blocks = blocks.len(),
            "Built wall plan"
        );

        Ok(WallPlan {
            result,
            cells,
            ports,
            circuits,
            blocks,
        })
    }
}

/// Finds the result for `pitch` in a comparison set.
#[must_use]
pub fn find_pitch(results: &[CalculationResult], pitch: f64) -> Option<&CalculationResult> {
    results.iter().find(|r| same_pitch(r.pitch, pitch))
}
