//! Command-line driver: solve one problem and print both traversals.
//!
//! ```text
//! decant [FIRST_CAPACITY SECOND_CAPACITY GOAL_VOLUME] [--report-dir DIR]
//! ```
//!
//! With no positional arguments the classic 5/3 instance with goal
//! volume 4 is solved. `--report-dir` additionally writes the report
//! artifact (`report.json` + `report_digest.txt`) into the given
//! directory.

use std::path::PathBuf;
use std::process::ExitCode;

use decant_harness::render::render_run;
use decant_harness::report::{report_bytes, ReportError};
use decant_harness::report_dir::{write_report_dir, ReportDirError};
use decant_harness::runner::run;
use decant_space::problem::ProblemInput;

/// The instance solved when no arguments are given.
const DEFAULT_PROBLEM: ProblemInput = ProblemInput::new(5, 3, 4);

#[derive(Debug)]
enum CliError {
    BadUsage { detail: String },
    Report(ReportError),
    ReportDir(ReportDirError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadUsage { detail } => write!(
                f,
                "{detail}\nusage: decant [FIRST_CAPACITY SECOND_CAPACITY GOAL_VOLUME] [--report-dir DIR]"
            ),
            Self::Report(e) => write!(f, "{e}"),
            Self::ReportDir(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    problem: ProblemInput,
    report_dir: Option<PathBuf>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliArgs, CliError> {
    let mut positional: Vec<u32> = Vec::new();
    let mut report_dir = None;

    while let Some(arg) = args.next() {
        if arg == "--report-dir" {
            let Some(dir) = args.next() else {
                return Err(CliError::BadUsage {
                    detail: "--report-dir requires a directory argument".to_string(),
                });
            };
            report_dir = Some(PathBuf::from(dir));
        } else {
            let volume = arg.parse::<u32>().map_err(|_| CliError::BadUsage {
                detail: format!("not a non-negative integer: {arg}"),
            })?;
            positional.push(volume);
        }
    }

    let problem = match positional.as_slice() {
        [] => DEFAULT_PROBLEM,
        &[first, second, goal] => ProblemInput::new(first, second, goal),
        other => {
            return Err(CliError::BadUsage {
                detail: format!("expected 0 or 3 positional arguments, got {}", other.len()),
            })
        }
    };

    Ok(CliArgs {
        problem,
        report_dir,
    })
}

fn run_cli<I: Iterator<Item = String>>(args: I) -> Result<(), CliError> {
    let cli = parse_args(args)?;
    let solve = run(cli.problem);

    println!("{}", render_run(&solve));

    if let Some(dir) = cli.report_dir {
        let bytes = report_bytes(&solve).map_err(CliError::Report)?;
        write_report_dir(&dir, &bytes).map_err(CliError::ReportDir)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run_cli(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decant: {e}");
            ExitCode::FAILURE
        }
    }
}
