//! Accessor generator and script harness CLI entry point.

mod cli;

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command, GenerateArgs, TestArgs};
use cxr_gen::{GenerateError, GenerateResult, Generator, MaxDepth, Template};
use cxr_harness::{HarnessConfig, ScriptRunner};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Generate(args) => match generate(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e @ GenerateError::InvalidArgument { .. }) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Test(args) => run_scripts(args),
    }
}

/// Logs go to stderr; stdout carries generated code and harness results.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CXR_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn generate(args: &GenerateArgs) -> GenerateResult<()> {
    // Validate before touching the output destination.
    let depth = MaxDepth::try_from(args.depth)?;
    let renderer = Template::from(args.template).renderer(args.order.into());
    let generator = Generator::new(depth, renderer);

    let count = match &args.output {
        Some(path) => generator.write_to(&mut BufWriter::new(File::create(path)?))?,
        None => generator.write_to(&mut io::stdout().lock())?,
    };
    tracing::info!(count, "Wrote accessor fragments");
    Ok(())
}

fn run_scripts(args: TestArgs) -> ExitCode {
    let runner = ScriptRunner::new(HarnessConfig {
        interpreter: args.interpreter,
        extension: args.extension,
    });

    match runner.run(&args.dir, &mut io::stdout().lock()) {
        Ok(report) if report.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
