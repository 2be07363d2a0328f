//! Report tables and profile export.
//!
//! Files written by [`write_outputs`]:
//! - `oxide_table.csv`: oxide thickness per layer (nm)
//! - `doping_table.csv`: peak concentrations, peak depths and junction depth
//! - `sheet_resistance.txt`: metal sheet resistance (Ω/□)
//! - `profiles.csv`: depth (μm) and both concentration profiles (atoms/cm³)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::scenario::{PeakReport, Report, Simulation};

pub const OXIDE_TABLE: &str = "oxide_table.csv";
pub const DOPING_TABLE: &str = "doping_table.csv";
pub const SHEET_RESISTANCE: &str = "sheet_resistance.txt";
pub const PROFILES: &str = "profiles.csv";

/// Capitalise a dopant name for table labels.
fn title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_junction(depth: Option<f64>) -> String {
    match depth {
        Some(d) => format!("{:.4}", d),
        None => "undefined".to_string(),
    }
}

fn peak_rows(dopant: &str, peak: Option<PeakReport>) -> [(String, String); 2] {
    let label = title(dopant);
    match peak {
        Some(p) => [
            (
                format!("{} peak concentration (atoms/cm³)", label),
                format!("{:.3e}", p.concentration),
            ),
            (
                format!("Depth of {} peak (μm)", dopant),
                format!("{:.4}", p.depth_um),
            ),
        ],
        None => [
            (
                format!("{} peak concentration (atoms/cm³)", label),
                "undefined".to_string(),
            ),
            (
                format!("Depth of {} peak (μm)", dopant),
                "undefined".to_string(),
            ),
        ],
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[(String, String)]) -> std::io::Result<()> {
    writeln!(out, "Parameter,Value")?;
    for (name, value) in rows {
        writeln!(out, "{},{}", name, value)?;
    }
    Ok(())
}

/// Oxide thickness table.
pub fn write_oxide_table<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let rows: Vec<(String, String)> = report
        .oxides
        .iter()
        .map(|o| (format!("{} (nm)", o.label), format!("{:.1}", o.thickness_nm)))
        .collect();
    write_table(out, &rows)
}

/// Peak and junction table.
pub fn write_doping_table<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let mut rows = Vec::with_capacity(5);
    rows.extend(peak_rows(&report.implant_dopant, report.implant_peak));
    rows.extend(peak_rows(
        &report.predeposition_dopant,
        report.predeposition_peak,
    ));
    rows.push((
        "Junction depth (μm)".to_string(),
        format_junction(report.junction_depth_um),
    ));
    write_table(out, &rows)
}

/// Depth and concentration columns for plotting.
pub fn write_profiles<W: Write>(out: &mut W, sim: &Simulation) -> std::io::Result<()> {
    let report = &sim.report;
    writeln!(
        out,
        "depth_um,{}_cm3,{}_cm3",
        report.implant_dopant, report.predeposition_dopant
    )?;
    for ((x, a), b) in sim
        .axis
        .as_slice()
        .iter()
        .zip(sim.implant_profile.iter())
        .zip(sim.predeposition_profile.iter())
    {
        writeln!(out, "{:.6},{:.6e},{:.6e}", x, a, b)?;
    }
    Ok(())
}

fn write_file<F>(dir: &Path, name: &str, write: F) -> Result<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("writing {}", path.display()))?;
    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Write all report files into `dir`, creating it if needed.
pub fn write_outputs(dir: &Path, sim: &Simulation) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let report = &sim.report;

    Ok(vec![
        write_file(dir, OXIDE_TABLE, |out| write_oxide_table(out, report))?,
        write_file(dir, DOPING_TABLE, |out| write_doping_table(out, report))?,
        write_file(dir, SHEET_RESISTANCE, |out| {
            writeln!(
                out,
                "{} sheet resistance (Ω/□): {:.3}",
                report.metal_name, report.sheet_resistance
            )
        })?,
        write_file(dir, PROFILES, |out| write_profiles(out, sim))?,
    ])
}

/// Human-readable summary for the terminal.
pub fn report_text(report: &Report) -> String {
    let mut s = String::new();
    s.push_str("Oxide Thickness\n");
    s.push_str("===============\n");
    for o in &report.oxides {
        s.push_str(&format!("  {:<20} {:>10.1} nm\n", o.label, o.thickness_nm));
    }
    s.push('\n');

    s.push_str("Dopant Profiles\n");
    s.push_str("===============\n");
    s.push_str(&format!(
        "  D({}) = {:.3e} cm²/s, D({}) = {:.3e} cm²/s\n",
        report.predeposition_dopant,
        report.predeposition_diffusivity,
        report.implant_dopant,
        report.anneal_diffusivity
    ));
    for (name, value) in peak_rows(&report.implant_dopant, report.implant_peak)
        .into_iter()
        .chain(peak_rows(
            &report.predeposition_dopant,
            report.predeposition_peak,
        ))
    {
        s.push_str(&format!("  {}: {}\n", name, value));
    }
    s.push_str(&format!(
        "  Junction depth (μm): {}\n",
        format_junction(report.junction_depth_um)
    ));
    s.push('\n');

    s.push_str(&format!(
        "{} sheet resistance: {:.3} Ω/□\n",
        report.metal_name, report.sheet_resistance
    ));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use crate::scenario::run_scenario;

    #[test]
    fn test_title() {
        assert_eq!(title("boron"), "Boron");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_oxide_table() {
        let sim = run_scenario(&Recipe::default()).unwrap();
        let mut buf = Vec::new();
        write_oxide_table(&mut buf, &sim.report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Parameter,Value");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Field oxide (nm),"));
    }

    #[test]
    fn test_doping_table_undefined_junction() {
        let mut recipe = Recipe::default();
        recipe.axis.stop_um = 0.1;
        recipe.axis.samples = 101;
        let sim = run_scenario(&recipe).unwrap();
        let mut buf = Vec::new();
        write_doping_table(&mut buf, &sim.report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Boron peak concentration (atoms/cm³)"));
        assert!(text.contains("Depth of phosphorus peak (μm),0.0000"));
        assert!(text.ends_with("Junction depth (μm),undefined\n"));
    }

    #[test]
    fn test_profiles_has_one_row_per_sample() {
        let sim = run_scenario(&Recipe::default()).unwrap();
        let mut buf = Vec::new();
        write_profiles(&mut buf, &sim).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), sim.axis.len() + 1);
        assert_eq!(text.lines().next(), Some("depth_um,boron_cm3,phosphorus_cm3"));
    }

    #[test]
    fn test_report_text_mentions_junction() {
        let sim = run_scenario(&Recipe::default()).unwrap();
        let text = report_text(&sim.report);
        assert!(text.contains("Junction depth (μm): 0.386"));
        assert!(text.contains("Gate oxide"));
    }
}
