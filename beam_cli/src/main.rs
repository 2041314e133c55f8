//! # Beam CLI
//!
//! Command line front end for `beam_core`. Collects a span and point loads
//! from flags or a JSON problem file, solves, and prints reactions, extreme
//! values and the sampled shear/moment diagrams.
//!
//! ```bash
//! beam-cli --length 10 --load 5:100 --load 2:60
//! beam-cli --input problem.json --format json
//! RUST_LOG=debug beam-cli --length 10 --load 5:100 --summary-only
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use beam_core::{analyze, BeamAnalysis, BeamProblem, CalcError, PointLoad};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Table,
    /// The full analysis as pretty JSON
    Json,
}

/// Shear and bending moment for a simply supported beam under point loads
#[derive(Debug, Parser)]
#[command(name = "beam-cli", version, about)]
struct Args {
    /// JSON problem file (beam, loads, optional settings)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Span between supports (m). Overrides the input file.
    #[arg(short = 'L', long, required_unless_present = "input")]
    length: Option<f64>,

    /// Point load as POSITION:MAGNITUDE (m:kN), repeatable
    #[arg(short, long = "load", value_parser = parse_load)]
    loads: Vec<PointLoad>,

    /// Label shown in the report
    #[arg(long)]
    label: Option<String>,

    /// Number of diagram samples, endpoints included
    #[arg(short, long)]
    samples: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print reactions and extremes only, without the sample table
    #[arg(long)]
    summary_only: bool,
}

fn parse_load(raw: &str) -> Result<PointLoad, String> {
    let (position, magnitude) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected POSITION:MAGNITUDE, got '{}'", raw))?;

    let position: f64 = position
        .trim()
        .parse()
        .map_err(|_| format!("invalid load position '{}'", position))?;
    let magnitude: f64 = magnitude
        .trim()
        .parse()
        .map_err(|_| format!("invalid load magnitude '{}'", magnitude))?;

    Ok(PointLoad::new(position, magnitude))
}

/// Merge the input file (if any) with command line overrides
fn build_problem(args: &Args) -> anyhow::Result<BeamProblem> {
    let mut problem = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading problem file {}", path.display()))?;
            let problem: BeamProblem = serde_json::from_str(&text)
                .with_context(|| format!("parsing problem file {}", path.display()))?;
            info!("loaded problem '{}' from {}", problem.label, path.display());
            problem
        }
        None => match args.length {
            Some(length) => BeamProblem::new("Beam", length),
            None => bail!("either --input or --length is required"),
        },
    };

    if let Some(length) = args.length {
        problem.beam.length_m = length;
    }
    if let Some(label) = &args.label {
        problem.label = label.clone();
    }
    if let Some(samples) = args.samples {
        problem.settings.sample_count = samples;
    }
    problem.loads.extend(args.loads.iter().copied());

    Ok(problem)
}

fn render_table(problem: &BeamProblem, analysis: &BeamAnalysis, summary_only: bool) -> String {
    let mut out = String::new();
    let summary = &analysis.summary;

    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!("  BEAM: {}\n", analysis.label));
    out.push_str("═══════════════════════════════════════\n\n");

    out.push_str("Input:\n");
    out.push_str(&format!("  Span:  {:.2} m\n", analysis.beam.length_m));
    for (i, load) in problem.loads.iter().enumerate() {
        out.push_str(&format!(
            "  P{}:    {:.2} kN at {:.2} m\n",
            i + 1,
            load.magnitude_kn,
            load.position_m
        ));
    }
    if problem.loads.is_empty() {
        out.push_str("  (no loads)\n");
    }
    out.push('\n');

    out.push_str("Reactions:\n");
    out.push_str(&format!("  Left support (RA):  {:.2} kN\n", analysis.reactions.left));
    out.push_str(&format!("  Right support (RB): {:.2} kN\n\n", analysis.reactions.right));

    out.push_str("Extremes:\n");
    out.push_str(&format!(
        "  V_max = {:.2} kN at x = {:.3} m\n",
        summary.max_shear.value, summary.max_shear.x
    ));
    out.push_str(&format!(
        "  M_max = {:.2} kN·m at x = {:.3} m\n",
        summary.max_moment.value, summary.max_moment.x
    ));
    if summary.min_moment.value < 0.0 {
        out.push_str(&format!(
            "  M_min = {:.2} kN·m at x = {:.3} m\n",
            summary.min_moment.value, summary.min_moment.x
        ));
    }

    if !summary_only {
        out.push_str("\n       x (m)      V (kN)    M (kN·m)\n");
        for (v, m) in analysis.shear.points().iter().zip(analysis.moment.points()) {
            out.push_str(&format!("  {:>10.3}  {:>10.3}  {:>10.3}\n", v.x, v.value, m.value));
        }
    }

    out
}

/// Solve and format the report in the requested output format
fn render(args: &Args) -> anyhow::Result<String> {
    let problem = build_problem(args)?;
    let analysis = analyze(&problem)?;

    let out = match args.format {
        OutputFormat::Table => render_table(&problem, &analysis, args.summary_only),
        OutputFormat::Json => serde_json::to_string_pretty(&analysis)? + "\n",
    };
    Ok(out)
}

fn run(args: &Args) -> anyhow::Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CalcError>() {
                Some(calc_err) => {
                    eprintln!("Error [{}]: {}", calc_err.error_code(), calc_err);
                    if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                        eprintln!();
                        eprintln!("Error JSON:");
                        eprintln!("{}", json);
                    }
                }
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_load() {
        assert_eq!(parse_load("5:100").unwrap(), PointLoad::new(5.0, 100.0));
        assert_eq!(parse_load(" 2.5 : -3 ").unwrap(), PointLoad::new(2.5, -3.0));
        assert!(parse_load("5").is_err());
        assert!(parse_load("a:1").is_err());
        assert!(parse_load("1:b").is_err());
    }

    #[test]
    fn test_args_from_flags() {
        let args = Args::try_parse_from([
            "beam-cli", "--length", "10", "--load", "5:100", "--load", "2:60", "--samples", "11",
        ])
        .unwrap();
        let problem = build_problem(&args).unwrap();

        assert_eq!(problem.beam.length_m, 10.0);
        assert_eq!(problem.loads.len(), 2);
        assert_eq!(problem.settings.sample_count, 11);
    }

    #[test]
    fn test_length_or_input_required() {
        assert!(Args::try_parse_from(["beam-cli", "--load", "5:100"]).is_err());
    }

    #[test]
    fn test_invalid_problem_surfaces_calc_error() {
        let args = Args::try_parse_from(["beam-cli", "--length", "10", "--load", "11:5"]).unwrap();
        let err = run(&args).unwrap_err();
        let calc_err = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc_err.field(), "loads[0].position_m");
    }

    fn write_problem(problem: &BeamProblem) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), serde_json::to_string_pretty(problem).unwrap()).unwrap();
        file
    }

    #[test]
    fn test_input_file_is_loaded() {
        let file = write_problem(&BeamProblem::new("From File", 8.0).with_load(2.0, 12.5));
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from(["beam-cli", "--input", path]).unwrap();
        let problem = build_problem(&args).unwrap();

        assert_eq!(problem.label, "From File");
        assert_eq!(problem.beam.length_m, 8.0);
        assert_eq!(problem.loads, vec![PointLoad::new(2.0, 12.5)]);
        assert_eq!(problem.settings.sample_count, 201);
    }

    #[test]
    fn test_flags_override_input_file() {
        let file = write_problem(&BeamProblem::new("From File", 8.0).with_load(2.0, 12.5));
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "beam-cli", "--input", path, "--length", "12", "--samples", "31", "--label", "Override",
            "--load", "9:40",
        ])
        .unwrap();
        let problem = build_problem(&args).unwrap();

        assert_eq!(problem.label, "Override");
        assert_eq!(problem.beam.length_m, 12.0);
        assert_eq!(problem.settings.sample_count, 31);
        // Flag loads are appended after the file's loads
        assert_eq!(
            problem.loads,
            vec![PointLoad::new(2.0, 12.5), PointLoad::new(9.0, 40.0)]
        );
    }

    #[test]
    fn test_missing_or_malformed_input_file() {
        let args = Args::try_parse_from(["beam-cli", "--input", "/nonexistent/beam.json"]).unwrap();
        let err = build_problem(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("reading problem file"));

        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ not json").unwrap();
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["beam-cli", "--input", path]).unwrap();
        let err = build_problem(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing problem file"));
    }

    #[test]
    fn test_json_format_parses_back() {
        let args = Args::try_parse_from([
            "beam-cli", "--length", "10", "--load", "2:60", "--samples", "11", "--format", "json",
            "--label", "B-2",
        ])
        .unwrap();
        let out = render(&args).unwrap();
        let analysis: BeamAnalysis = serde_json::from_str(&out).unwrap();

        assert_eq!(analysis.label, "B-2");
        assert_eq!(analysis.moment.len(), 11);
        assert!((analysis.reactions.left - 48.0).abs() < 1e-9);
        assert!((analysis.summary.max_moment.value - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_table() {
        let problem = BeamProblem::new("B-1", 10.0).with_load(2.0, 60.0);
        let analysis = analyze(&problem).unwrap();
        let table = render_table(&problem, &analysis, true);

        assert!(table.contains("Left support (RA):  48.00 kN"));
        assert!(table.contains("Right support (RB): 12.00 kN"));
        assert!(table.contains("M_max = 96.00 kN·m at x = 2.000 m"));
        assert!(!table.contains("V (kN)"));
    }
}
