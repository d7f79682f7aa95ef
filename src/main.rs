use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use issues::cli::{self, Args};
use issues::error::LocateError;
use issues::{App, Error};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ISSUES_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "-"]),
    );
    pb.set_message("Fetching issues...");
    pb
}

fn fail(err: &Error) -> ExitCode {
    eprintln!("{}: {}", "Error".red().bold(), err);
    if matches!(err, Error::Locate(LocateError::MissingRepo)) {
        eprintln!("\n{}", cli::usage());
    }
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        tracing::debug!("caused by: {cause}");
        source = cause.source();
    }
    ExitCode::from(err.exit_code())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => return fail(&err.into()),
    };

    let app = App::new(config);
    let pb = spinner();
    let mut stdout = std::io::stdout();

    let result = tokio::select! {
        res = app.run(&mut stdout, &pb) => res,
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    };
    pb.finish_and_clear();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}
