pub mod from_file;
pub mod from_uri;

use std::path::PathBuf;

pub use from_file::from_file;
pub use from_uri::from_uri;
use tracing::error;

use crate::{
  error::GenerateError,
  generator::{DtoGenerator, GenerationRequest, orchestrator::GenerationStats},
  utils::spec::SourceDocument,
};

/// What a successful command produced.
#[derive(Debug)]
pub struct CommandOutcome {
  pub stats: GenerationStats,
  pub output: PathBuf,
}

fn log_failure(err: &GenerateError) {
  error!(class = %err.class(), "{err}");
}

/// Rejects blank documents, then hands the request to the generator.
async fn generate_from(
  generator: &DtoGenerator,
  source: SourceDocument,
  output: PathBuf,
  namespace: String,
) -> Result<CommandOutcome, GenerateError> {
  let source = source.ensure_content().inspect_err(log_failure)?;

  let stats = generator
    .generate(GenerationRequest {
      source,
      namespace,
      output: output.clone(),
    })
    .await?;

  Ok(CommandOutcome { stats, output })
}
