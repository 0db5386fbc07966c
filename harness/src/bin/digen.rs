//! `digen`: run the digit-rearrangement study from the command line.
//!
//! Without `--start`, `--target` and `--tests` the three inputs are collected
//! interactively. They are given all together or not at all.
//!
//! stdout carries only the report. Prompts, the exit prompt, errors and logs
//! go to stderr, so `--format json` output can be piped into a JSON parser.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use digen_kernel::proof::hash::ContentHash;

use digen_harness::config::{RunConfig, TrialInputs};
use digen_harness::logging::init_tracing;
use digen_harness::prompt::{collect_inputs, wait_for_enter};
use digen_harness::report::TrialReportV1;
use digen_harness::runner::{run_trials, RunError};

/// Report format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Digit-rearrangement search study
#[derive(Parser, Debug)]
#[command(name = "digen")]
#[command(author, version, about = "Compare four search strategies over a digit-rearrangement rule", long_about = None)]
struct Args {
    /// Starting integer (at least two digits unless equal to the target)
    #[arg(long = "start", requires_all = ["target", "tests"])]
    start: Option<u64>,

    /// Target integer
    #[arg(long = "target", requires_all = ["start", "tests"])]
    target: Option<u64>,

    /// Number of trials per stochastic strategy
    #[arg(long = "tests", requires_all = ["start", "target"])]
    tests: Option<usize>,

    /// Seed for the random source (drawn from OS entropy if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Iteration cap per trial and for breadth levels
    #[arg(long = "max-iterations")]
    max_iterations: Option<u64>,

    /// Cap on the breadth frontier size
    #[arg(long = "max-frontier")]
    max_frontier: Option<u64>,

    /// Lift the caps not set explicitly
    #[arg(long = "unbounded")]
    unbounded: bool,

    /// Do not run breadth search
    #[arg(long = "skip-breadth")]
    skip_breadth: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the canonical JSON report to this file
    #[arg(long = "out")]
    out: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long = "no-wait")]
    no_wait: bool,
}

impl Args {
    fn config(&self) -> RunConfig {
        RunConfig {
            seed: self.seed,
            max_iterations: self.max_iterations,
            max_frontier_len: self.max_frontier,
            unbounded: self.unbounded,
            skip_breadth: self.skip_breadth,
        }
    }

    fn inputs(&self) -> io::Result<TrialInputs> {
        match (self.start, self.target, self.tests) {
            (Some(start), Some(target), Some(tests)) => Ok(TrialInputs {
                start,
                target,
                tests,
            }),
            _ => collect_inputs(&mut io::stdin().lock(), &mut io::stderr().lock()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let result = run(&args);
    if let Err(e) = &result {
        eprintln!("digen: {e}");
    }

    let _ = wait_before_exit(args.no_wait, &mut io::stdin().lock(), &mut io::stderr().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Block on the exit prompt unless `no_wait`. The prompt goes to `prompt_out`,
/// never to the report stream.
fn wait_before_exit<R: BufRead, W: Write>(
    no_wait: bool,
    reader: &mut R,
    prompt_out: &mut W,
) -> io::Result<()> {
    if no_wait {
        return Ok(());
    }
    wait_for_enter(reader, prompt_out)
}

fn run(args: &Args) -> Result<(), RunError> {
    let inputs = args.inputs()?;
    let report = run_trials(&inputs, &args.config())?;
    let digest = report.digest()?;

    if let Some(path) = &args.out {
        report.write_json(path)?;
    }

    let mut stdout = io::stdout().lock();
    print_report(&mut stdout, &report, args.format, &digest)?;
    stdout.flush()?;
    Ok(())
}

fn print_report<W: Write>(
    out: &mut W,
    report: &TrialReportV1,
    format: OutputFormat,
    digest: &ContentHash,
) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            write!(out, "{}", report.render_text(digest))?;
        }
        OutputFormat::Json => {
            let view = report.to_display_json(digest)?;
            let text = serde_json::to_string_pretty(&view).map_err(|e| RunError::Io {
                detail: e.to_string(),
            })?;
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}
