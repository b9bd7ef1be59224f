use anyhow::Result;
use chrono::{Local, NaiveTime};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;
use domain::models::RunConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let now = match cli.today {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };
    let config = RunConfig {
        token: cli.token,
        pages_dir: cli.pages_dir,
        template_path: cli.template,
        source_path: cli.source,
        output_path: cli.out,
        now,
    };

    let artifact = commands::generate::run(&config)?;
    println!("{artifact}");
    Ok(())
}
