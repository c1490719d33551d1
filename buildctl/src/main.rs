use std::env;
use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use buildctl::build::ReportingBuilder;
use buildctl::{run, RunError};

fn main() -> ExitCode {
  let _ = dotenv::dotenv(); // Ignore error: `.env` is optional.
  init_tracing();

  // Non-UTF-8 arguments are converted lossily.
  let mut args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
  let program = args.next().unwrap_or_else(|| "buildctl".to_string());
  let tokens: Vec<String> = args.collect();

  match run(&program, tokens.as_slice(), ReportingBuilder::with_stdout(), io::stdout()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(RunError::Parse(_)) => ExitCode::FAILURE, // Already reported with usage text.
    Err(error) => {
      error!("{}", error);
      ExitCode::FAILURE
    }
  }
}

/// Log to stderr, filtered by `RUST_LOG`, defaulting to warnings and errors only.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(io::stderr))
    .init();
}
