//! kafka-compose CLI
//!
//! Usage: kafka-compose --kafka <ADDRS> --zookeeper <ADDRS> [--manager <ADDRS>] [DIR]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use kafka_compose::application::GenerateOptions;
use kafka_compose::config;
use kafka_compose::presentation::{
    create_generate_use_case, logging, render_result, report_error, Cli, OutputFormat,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let format = OutputFormat::from_json_flag(cli.json);

    match run(&cli, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut stderr = std::io::stderr();
            match format {
                OutputFormat::Json => {
                    report_error(format, &err, &mut std::io::stdout(), &mut stderr)
                }
                OutputFormat::Text => {
                    report_error(format, &err, &mut std::io::stderr(), &mut stderr)
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let (mut config, warnings) = config::resolve(cli.config.as_deref())?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    if let Some(secret) = &cli.manager_secret {
        config.manager.secret = Some(secret.clone());
    }

    let options = GenerateOptions::new(cli.kafka.clone(), cli.zookeeper.clone())
        .with_managers(cli.manager.clone())
        .with_output_dir(&cli.dir)
        .with_dry_run(cli.dry_run);

    let result = create_generate_use_case(&config).execute(&options)?;

    render_result(format, &result, cli.quiet, &mut std::io::stdout())
        .context("failed to write report")?;

    Ok(())
}
