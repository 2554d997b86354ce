#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
  generator::{DtoGenerator, settings::GeneratorSettings},
  ui::{Cli, Colors, Commands, Console, colors, commands},
};

mod error;
mod generator;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
  init_tracing();

  let cli = Cli::parse();
  let console = Console::new(Colors::new(colors::colors_enabled(cli.color)));
  let generator = DtoGenerator::new(GeneratorSettings::dto_defaults());

  let outcome = match cli.command {
    Commands::FromFile {
      file_name,
      output_file_name,
      namespace,
    } => commands::from_file(&generator, &file_name, output_file_name, namespace).await,
    Commands::FromUri {
      url,
      output_file_name,
      namespace,
    } => {
      let client = reqwest::Client::new();
      commands::from_uri(&generator, &client, &url, output_file_name, namespace).await
    }
  };

  match outcome {
    Ok(outcome) => {
      console.success(&outcome.stats, &outcome.output);
      ExitCode::SUCCESS
    }
    Err(err) => {
      console.failure(&err);
      ExitCode::from(err.class().exit_code())
    }
  }
}

/// Warnings and errors by default; `RUST_LOG` opens up debug output.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact(),
    )
    .init();
}
