use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tbl_profile::{CurveKind, ProfileSummary};
use tbl_study::{StudyError, StudyResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tbl-cli")]
#[command(about = "Turbulent boundary-layer profile characterization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate study file syntax and structure
    Validate {
        /// Path to the study YAML or JSON file
        study_path: PathBuf,
    },
    /// List stations in a study
    Stations {
        /// Path to the study YAML or JSON file
        study_path: PathBuf,
    },
    /// Characterize every station and print the results
    Report {
        /// Path to the study YAML or JSON file
        study_path: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export one scaled curve of one station as CSV
    Curve {
        /// Path to the study YAML or JSON file
        study_path: PathBuf,
        /// Station index (0-based, study order)
        station: usize,
        /// Curve name (velocity, outer, inner, defect, clauser-rotta,
        /// pressure-gradient, zagarola-smits, log-law, sub-layer)
        kind: CurveKind,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export one scalar quantity against station x as CSV
    Trend {
        /// Path to the study YAML or JSON file
        study_path: PathBuf,
        /// Quantity (re_x, re_tau, re_theta, re_delta_star, delta, delta_star,
        /// theta, h, beta, p_plus, k)
        quantity: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> StudyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Stations { study_path } => cmd_stations(&study_path),
        Commands::Report {
            study_path,
            json,
            output,
        } => cmd_report(&study_path, json, output.as_deref()),
        Commands::Curve {
            study_path,
            station,
            kind,
            output,
        } => cmd_curve(&study_path, station, kind, output.as_deref()),
        Commands::Trend {
            study_path,
            quantity,
            output,
        } => cmd_trend(&study_path, &quantity, output.as_deref()),
    }
}

fn cmd_validate(study_path: &Path) -> StudyResult<()> {
    println!("Validating study: {}", study_path.display());
    tbl_study::load(study_path)?;
    println!("✓ Study is valid");
    Ok(())
}

fn cmd_stations(study_path: &Path) -> StudyResult<()> {
    let study = tbl_study::load(study_path)?;
    println!("Stations in study '{}':", study.name);
    for (index, station) in study.stations.iter().enumerate() {
        let tau = match station.tau_pa {
            Some(_) => "explicit",
            None => "interpolated",
        };
        let dpdx = match station.dpdx_pa_m {
            Some(_) => "explicit",
            None => "interpolated",
        };
        println!(
            "  {:>3}  x = {:.3} m  ({} samples, tau {}, dP/dx {})",
            index,
            station.x_m,
            station.y_m.len(),
            tau,
            dpdx
        );
    }
    Ok(())
}

fn cmd_report(study_path: &Path, json: bool, output: Option<&Path>) -> StudyResult<()> {
    let study = tbl_study::load(study_path)?;
    let report = tbl_study::analyze(&study)?;

    let text = if json {
        report.to_json()?
    } else {
        render_table(&report)
    };

    write_output(&text, output)
}

fn render_table(report: &tbl_study::StudyReport) -> String {
    let mut out = format!("Turbulent boundary layer properties: {}\n\n", report.name);
    out.push_str(&format!(
        "{:>7} {:>8} {:>10} {:>10} {:>10} {:>8} {:>8} {:>8} {:>7} {:>8} {:>10} {:>10}\n",
        "x [m]", "u_e", "Re_x", "Re_tau", "Re_theta", "delta", "delta*", "theta", "H", "beta",
        "p+", "K"
    ));

    let opt = |v: Option<f64>, prec: usize, sci: bool| match v {
        Some(v) if sci => format!("{:.*e}", prec, v),
        Some(v) => format!("{:.*}", prec, v),
        None => "-".to_string(),
    };

    for station in &report.stations {
        match &station.summary {
            Some(s) => out.push_str(&format!(
                "{:>7.2} {:>8.2} {:>10} {:>10} {:>10} {:>8.4} {:>8.4} {:>8.4} {:>7} {:>8} {:>10} {:>10}{}\n",
                station.x_m,
                s.u_e,
                opt(s.re_x, 2, true),
                opt(s.re_tau, 2, true),
                opt(s.re_theta, 2, true),
                s.delta,
                s.delta_star,
                s.theta,
                opt(s.shape_factor, 3, false),
                opt(s.beta, 2, false),
                opt(s.p_plus, 5, false),
                opt(s.k, 3, true),
                if s.edge_clamped { "  (edge clamped)" } else { "" },
            )),
            None => out.push_str(&format!(
                "{:>7.2}  rejected: {}\n",
                station.x_m,
                station.error.as_deref().unwrap_or("unknown error")
            )),
        }
    }
    out
}

fn cmd_curve(
    study_path: &Path,
    station: usize,
    kind: CurveKind,
    output: Option<&Path>,
) -> StudyResult<()> {
    let study = tbl_study::load(study_path)?;
    let profile = tbl_study::build_station(&study, station)?;
    let curve = profile.curve(kind)?;

    let (x_label, y_label) = kind.labels();
    let mut csv = format!("{},{}\n", x_label, y_label);
    for (x, y) in curve.points() {
        csv.push_str(&format!("{},{}\n", x, y));
    }

    write_output(&csv, output)
}

fn trend_value(summary: &ProfileSummary, quantity: &str) -> StudyResult<Option<f64>> {
    let value = match quantity {
        "re_x" => summary.re_x,
        "re_tau" => summary.re_tau,
        "re_theta" => summary.re_theta,
        "re_delta_star" => summary.re_delta_star,
        "delta" => Some(summary.delta),
        "delta_star" => Some(summary.delta_star),
        "theta" => Some(summary.theta),
        "h" | "shape_factor" => summary.shape_factor,
        "beta" => summary.beta,
        "p_plus" => summary.p_plus,
        "k" => summary.k,
        _ => {
            return Err(StudyError::InvalidInput(format!(
                "Unknown quantity: {}",
                quantity
            )));
        }
    };
    Ok(value)
}

fn cmd_trend(study_path: &Path, quantity: &str, output: Option<&Path>) -> StudyResult<()> {
    let study = tbl_study::load(study_path)?;
    let report = tbl_study::analyze(&study)?;

    let mut csv = format!("x_m,{}\n", quantity);
    for station in &report.stations {
        let Some(summary) = &station.summary else {
            continue;
        };
        if let Some(v) = trend_value(summary, quantity)? {
            csv.push_str(&format!("{},{}\n", station.x_m, v));
        }
    }

    write_output(&csv, output)
}

fn write_output(text: &str, output: Option<&Path>) -> StudyResult<()> {
    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!("✓ Wrote {}", path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}
