use std::path::Path;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use super::Colors;
use crate::{
  error::{ErrorClass, GenerateError},
  generator::orchestrator::GenerationStats,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// User-facing console output. Logs go through `tracing` on stderr; this is
/// what a person running the tool reads.
pub struct Console {
  colors: Colors,
}

impl Console {
  pub const fn new(colors: Colors) -> Self {
    Self { colors }
  }

  pub fn success(&self, stats: &GenerationStats, output: &Path) {
    println!(
      "{} {}",
      format_timestamp().with(self.colors.timestamp()),
      success_message(stats, output).with(self.colors.success())
    );
  }

  /// Precondition failures go to stdout, everything else to stderr.
  pub fn failure(&self, err: &GenerateError) {
    match err.class() {
      ErrorClass::Precondition => println!("{err}"),
      ErrorClass::Io | ErrorClass::Generation => {
        eprintln!("{} {}", "Error:".with(self.colors.accent()), err);
      }
    }
  }
}

fn success_message(stats: &GenerationStats, output: &Path) -> String {
  format!("Generated {} types into {}", stats.types_generated, output.display())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_success_message() {
    let stats = GenerationStats {
      types_generated: 3,
      ..GenerationStats::default()
    };
    assert_eq!(
      success_message(&stats, Path::new("out/Api.cs")),
      "Generated 3 types into out/Api.cs"
    );
  }

  #[test]
  fn test_timestamp_format() {
    let stamp = format_timestamp();
    assert_eq!(stamp.len(), 10);
    assert!(stamp.starts_with('[') && stamp.ends_with(']'));
  }
}
