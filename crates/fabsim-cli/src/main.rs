//! fabsim command-line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fabsim_cli::output::{report_text, write_outputs};
use fabsim_cli::{Recipe, run_scenario};
use fabsim_solver::{Arrhenius, Dopant, RateConstants};

#[derive(Parser)]
#[command(name = "fabsim")]
#[command(about = "1-D semiconductor process simulator: oxidation, diffusion and implant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal-Grove oxide thickness
    Oxide {
        /// Parabolic rate constant B (nm²/min)
        #[arg(long)]
        parabolic: f64,

        /// Linear rate constant B/A (nm/min)
        #[arg(long)]
        linear: f64,

        /// Oxidation time (min)
        #[arg(long)]
        time: f64,
    },

    /// Arrhenius diffusion coefficient
    Diffusivity {
        /// Built-in dopant (boron, phosphorus)
        #[arg(long, conflicts_with_all = ["d0", "ea"])]
        dopant: Option<Dopant>,

        /// Pre-exponential factor (cm²/s)
        #[arg(long, requires = "ea")]
        d0: Option<f64>,

        /// Activation energy (eV)
        #[arg(long, requires = "d0")]
        ea: Option<f64>,

        /// Temperature (°C)
        #[arg(long)]
        temp: f64,
    },

    /// Run the process scenario and write report tables
    Run {
        /// Recipe JSON file (defaults to the built-in recipe)
        #[arg(long)]
        recipe: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default recipe as JSON
    Recipe,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Oxide {
            parabolic,
            linear,
            time,
        } => cmd_oxide(parabolic, linear, time),
        Commands::Diffusivity {
            dopant,
            d0,
            ea,
            temp,
        } => cmd_diffusivity(dopant, d0, ea, temp),
        Commands::Run {
            recipe,
            out_dir,
            json,
        } => cmd_run(recipe, out_dir, json),
        Commands::Recipe => cmd_recipe(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_oxide(parabolic: f64, linear: f64, time: f64) -> Result<()> {
    let rates = RateConstants::new(parabolic, linear, time)?;
    println!("{:.3} nm", rates.thickness());
    Ok(())
}

fn cmd_diffusivity(
    dopant: Option<Dopant>,
    d0: Option<f64>,
    ea: Option<f64>,
    temp: f64,
) -> Result<()> {
    let params = match (dopant, d0, ea) {
        (Some(dopant), _, _) => dopant.arrhenius(),
        (None, Some(d0), Some(ea)) => Arrhenius::new(d0, ea),
        _ => bail!("either --dopant or both --d0 and --ea are required"),
    };
    let d = params.try_at(temp)?;
    println!("{:.4e} cm²/s", d);
    Ok(())
}

fn cmd_run(recipe_path: Option<PathBuf>, out_dir: PathBuf, json: bool) -> Result<()> {
    let recipe = match recipe_path {
        Some(path) => Recipe::load(&path)?,
        None => Recipe::default(),
    };

    let sim = run_scenario(&recipe)?;
    for warning in &sim.report.warnings {
        eprintln!("Warning: {}", warning);
    }

    let written = write_outputs(&out_dir, &sim)?;

    if json {
        let s = serde_json::to_string_pretty(&sim.report).context("serializing report")?;
        println!("{}", s);
    } else {
        print!("{}", report_text(&sim.report));
        println!();
        for path in &written {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn cmd_recipe() -> Result<()> {
    println!("{}", Recipe::default().to_json()?);
    Ok(())
}
