use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::io;
use std::path::PathBuf;
use task_tracker::{TaskStore, shell};

/// Simple interactive to-do task tracker backed by a flat file.
#[derive(Parser, Debug)]
struct Cli {
    /// Path of the task storage file
    #[arg(long, default_value = "tasks.txt")]
    file: PathBuf,
}

fn init_logging() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu on
    // stdout.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Cli::parse();

    let mut store = TaskStore::load(&args.file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut store, stdin.lock(), stdout.lock())?;
    Ok(())
}
