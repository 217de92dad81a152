use std::io;
use std::process;
use std::sync::Arc;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use modplan::application::{CommandExecutor, PlannerStore};
use modplan::cli::args::Cli;
use modplan::cli::error::CliResult;
use modplan::cli::{output, repl};
use modplan::config::Settings;
use modplan::infrastructure::traits::{FileSystem, PlannerStorage, RealFileSystem};
use modplan::infrastructure::JsonPlannerStorage;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        return;
    }
    if cli.info {
        if let Some(author) = Cli::command().get_author() {
            println!("AUTHOR: {}", author)
        }
        if let Some(version) = Cli::command().get_version() {
            println!("VERSION: {}", version)
        }
    }

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(path) = &cli.data_file {
        settings.data_file = path.clone();
    }
    tracing::debug!("data file: {}", settings.data_file.display());

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let storage = Arc::new(JsonPlannerStorage::new(settings.data_file.clone(), fs));

    // Load failures are never fatal: malformed or unreadable data means an
    // empty planner plus a warning.
    let store = match storage.load() {
        Ok(Some(snapshot)) => match PlannerStore::from_snapshot(snapshot) {
            Ok(store) => store,
            Err(e) => {
                output::warning(&format!("planner data is inconsistent, starting empty: {e}"));
                PlannerStore::new()
            }
        },
        Ok(None) => PlannerStore::new(),
        Err(e) => {
            output::warning(&format!("could not load planner data, starting empty: {e}"));
            PlannerStore::new()
        }
    };

    let mut executor = CommandExecutor::new(store, storage);

    match &cli.command {
        Some(text) => {
            let result = executor.execute(text)?;
            output::info(&result.message);
            Ok(())
        }
        None => repl::run(&mut executor, &settings),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("max verbosity is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
