//! The code generation adapter: OpenAPI document in, C# DTO file out.

pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod schema_converter;
pub mod settings;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use self::{
  orchestrator::{GeneratedOutput, GenerationStats, Orchestrator},
  settings::GeneratorSettings,
};
use crate::{error::GenerateError, utils::spec::SourceDocument};

/// One generation run: source text, target namespace and output file.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
  pub source: SourceDocument,
  pub namespace: String,
  pub output: PathBuf,
}

/// Runs the parse, convert, emit and write pipeline with fixed settings.
#[derive(Debug, Clone)]
pub struct DtoGenerator {
  settings: GeneratorSettings,
}

impl DtoGenerator {
  #[must_use]
  pub const fn new(settings: GeneratorSettings) -> Self {
    Self { settings }
  }

  /// Parses the document and renders the C# file without touching the disk.
  pub fn render(&self, source: &SourceDocument, namespace: &str) -> Result<GeneratedOutput, GenerateError> {
    let spec = source.parse()?;
    debug!(
      origin = %source.origin,
      title = %spec.info.title,
      version = %spec.info.version,
      "parsed OpenAPI document"
    );

    Orchestrator::new(spec, &self.settings)
      .generate(namespace)
      .map_err(|err| GenerateError::Convert {
        message: format!("{err:#}"),
      })
  }

  /// Generates the file for `request`, replacing any existing content.
  ///
  /// Nothing is written when parsing or conversion fails. Failures are
  /// logged here and returned to the caller.
  pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationStats, GenerateError> {
    let GenerationRequest {
      source,
      namespace,
      output,
    } = request;
    info!(origin = %source.origin, %namespace, output = %output.display(), "generating DTOs");

    let result = match self.render(&source, &namespace) {
      Ok(generated) => write_output(&output, &generated.code).await.map(|()| generated.stats),
      Err(err) => Err(err),
    };

    match &result {
      Ok(stats) => info!(
        types = stats.types_generated,
        records = stats.records_generated,
        enums = stats.enums_generated,
        properties = stats.properties_generated,
        warnings = stats.warnings.len(),
        output = %output.display(),
        "generated DTOs"
      ),
      Err(err) => error!(class = %err.class(), "{err}"),
    }
    result
  }
}

async fn write_output(path: &Path, code: &str) -> Result<(), GenerateError> {
  let to_error = |source| GenerateError::WriteOutput {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
  }
  tokio::fs::write(path, code).await.map_err(to_error)
}
