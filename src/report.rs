//! Text, JSON and CSV rendering of planning results for the CLI.

use std::io::{self, Write};

use serde::Serialize;

use ledwall_planner::planning::{CalculationResult, WallPlan};

/// One row of the pitch comparison in CSV form.
#[derive(Debug, Serialize)]
struct ComparisonRow<'a> {
    pitch: f64,
    resolution_width: u64,
    resolution_height: u64,
    resolution_class: &'a str,
    total_cabinets: usize,
    lan_ports: usize,
    controller: &'a str,
    peak_power_watts: f64,
    avg_power_watts: f64,
    supply_amps: f64,
    circuits: usize,
    main_breaker_amps: f64,
    main_breaker_at_ceiling: bool,
}

impl<'a> From<&'a CalculationResult> for ComparisonRow<'a> {
    fn from(r: &'a CalculationResult) -> Self {
        Self {
            pitch: r.pitch,
            resolution_width: r.resolution_width,
            resolution_height: r.resolution_height,
            resolution_class: r.resolution_class.label(),
            total_cabinets: r.total_cabinets,
            lan_ports: r.lan_ports,
            controller: &r.controller,
            peak_power_watts: r.peak_power_watts,
            avg_power_watts: r.avg_power_watts,
            supply_amps: round2(r.supply_amps),
            circuits: r.circuits,
            main_breaker_amps: r.main_breaker_amps,
            main_breaker_at_ceiling: r.main_breaker_at_ceiling,
        }
    }
}

/// Writes the pitch comparison as an aligned text table.
pub fn comparison_table<W: Write>(out: &mut W, results: &[CalculationResult]) -> io::Result<()> {
    if let Some(first) = results.first() {
        writeln!(
            out,
            "Wall {} x {} mm ({:.2} m², {}), {} x {} cabinets",
            first.width_mm,
            first.height_mm,
            first.area_sq_m,
            first.environment,
            first.cabinets_width,
            first.cabinets_height
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "{:>6}  {:>11}  {:>5}  {:>5}  {:<16}  {:>9}  {:>8}  {:>8}  {:>6}",
        "Pitch", "Resolution", "Class", "Ports", "Controller", "Peak W", "Amps", "Circuits", "Main A"
    )?;
    for r in results {
        let main = if r.main_breaker_at_ceiling {
            format!("{}+", r.main_breaker_amps)
        } else {
            r.main_breaker_amps.to_string()
        };
        writeln!(
            out,
            "{:>6}  {:>11}  {:>5}  {:>5}  {:<16}  {:>9}  {:>8.2}  {:>8}  {:>6}",
            r.pitch,
            format!("{}x{}", r.resolution_width, r.resolution_height),
            r.resolution_class,
            r.lan_ports,
            r.controller,
            r.peak_power_watts,
            r.supply_amps,
            r.circuits,
            main
        )?;
    }
    Ok(())
}

/// Writes the pitch comparison as CSV with a header row.
pub fn comparison_csv<W: Write>(out: W, results: &[CalculationResult]) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for r in results {
        writer.serialize(ComparisonRow::from(r))?;
    }
    writer.flush()
}

/// Writes a wall plan as a text report.
pub fn plan_table<W: Write>(out: &mut W, plan: &WallPlan) -> io::Result<()> {
    let r = &plan.result;

    writeln!(out, "Pitch {} mm, {}", r.pitch, r.environment)?;
    writeln!(
        out,
        "  Cabinets    {} x {} = {}",
        r.cabinets_width, r.cabinets_height, r.total_cabinets
    )?;
    writeln!(
        out,
        "  Resolution  {} x {} ({}, {} px)",
        r.resolution_width, r.resolution_height, r.resolution_class, r.total_pixels
    )?;
    writeln!(
        out,
        "  Network     {} LAN ports, {} x {}",
        r.lan_ports, r.controller_units, r.controller
    )?;
    writeln!(
        out,
        "  Power       {} W peak, {} W average, {:.2} A",
        r.peak_power_watts, r.avg_power_watts, r.supply_amps
    )?;
    writeln!(
        out,
        "  Main        {} A breaker (needs {:.2} A){}",
        r.main_breaker_amps,
        r.required_main_amps,
        if r.main_breaker_at_ceiling {
            ", EXCEEDS LARGEST STANDARD SIZE"
        } else {
            ""
        }
    )?;
    writeln!(out, "  Area        {:.2} m²", r.area_sq_m)?;

    writeln!(out)?;
    writeln!(out, "Ports")?;
    for port in &plan.ports {
        writeln!(
            out,
            "  P{:<3} {:>3} cabinets  {:>9} px  {:>6.1}%",
            port.id + 1,
            port.cabinet_count,
            port.pixel_count,
            port.load_percentage
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Circuits")?;
    for circuit in &plan.circuits {
        writeln!(
            out,
            "  C{:<3} {:>3} cabinets  {:>8} W  {:>6.2} A",
            circuit.id + 1,
            circuit.cabinet_count,
            circuit.watts,
            circuit.amps
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Distribution blocks")?;
    for block in &plan.blocks {
        let members = block
            .circuit_ids
            .iter()
            .map(|id| format!("C{}", id + 1))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  MCCB{:<2} {:>4} A  ({:.2} A)  {}{}",
            block.id,
            block.breaker_size,
            block.total_amps,
            members,
            if block.at_ceiling { "  [at ceiling]" } else { "" }
        )?;
    }
    Ok(())
}

/// Writes the cabinet grid of a plan as CSV.
pub fn plan_csv<W: Write>(out: W, plan: &WallPlan) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for cell in &plan.cells {
        writer.serialize(cell)?;
    }
    writer.flush()
}

/// Writes any serialisable value as pretty JSON followed by a newline.
pub fn json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
