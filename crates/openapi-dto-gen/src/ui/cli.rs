use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::colors::{ColorMode, Colors};

#[derive(Parser, Debug)]
#[command(name = "openapi-dto-gen")]
#[command(author, version, about = "OpenAPI v3 to C# DTO generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate DTOs from an OpenAPI document on disk
  FromFile {
    /// Path to the OpenAPI document (JSON, or YAML by extension)
    file_name: PathBuf,

    /// Path where the generated C# file will be written
    output_file_name: PathBuf,

    /// Namespace for the generated types
    namespace: String,
  },
  /// Generate DTOs from an OpenAPI document served over HTTP
  FromUri {
    /// URL of the OpenAPI document
    url: String,

    /// Path where the generated C# file will be written
    output_file_name: PathBuf,

    /// Namespace for the generated types
    namespace: String,
  },
}
