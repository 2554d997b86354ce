//! Orchestration for the OpenAPI to C# DTO pipeline.
//!
//! [`Orchestrator`] owns a parsed document and turns it into a single C#
//! compilation unit plus statistics. It performs no I/O.

use tracing::debug;

use super::{
  ast::TypeDecl,
  codegen::render_file,
  schema_converter::SchemaConverter,
  settings::GeneratorSettings,
};

pub struct Orchestrator<'a> {
  spec: oas3::Spec,
  settings: &'a GeneratorSettings,
}

/// Metadata about the OpenAPI document for the file header.
#[derive(Debug, Clone)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Total number of C# types declared
  pub types_generated: usize,
  pub records_generated: usize,
  pub enums_generated: usize,
  /// Properties across all records, excluding extension-data dictionaries
  pub properties_generated: usize,
  /// Non-fatal warnings from the conversion process
  pub warnings: Vec<String>,
}

impl GenerationStats {
  fn from_types(types: &[TypeDecl], warnings: Vec<String>) -> Self {
    let mut stats = Self {
      types_generated: types.len(),
      warnings,
      ..Self::default()
    };
    for decl in types {
      match decl {
        TypeDecl::Record(record) => {
          stats.records_generated += 1;
          stats.properties_generated += record.properties.len();
        }
        TypeDecl::Enum(_) => stats.enums_generated += 1,
      }
    }
    stats
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

impl<'a> Orchestrator<'a> {
  #[must_use]
  pub fn new(spec: oas3::Spec, settings: &'a GeneratorSettings) -> Self {
    Self { spec, settings }
  }

  #[must_use]
  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.spec.info.title.clone(),
      version: self.spec.info.version.clone(),
    }
  }

  /// Converts every component schema and renders the C# file.
  ///
  /// # Errors
  ///
  /// Returns an error when the settings ask for more than DTOs, or when a
  /// schema cannot be converted (for example a `$ref` to a missing schema).
  pub fn generate(&self, namespace: &str) -> anyhow::Result<GeneratedOutput> {
    if !self.settings.dto_only {
      anyhow::bail!("only DTO generation is supported; client generation is not available");
    }

    let conversion = SchemaConverter::new(&self.spec, self.settings).convert_all()?;
    debug!(
      types = conversion.types.len(),
      warnings = conversion.warnings.len(),
      "converted component schemas"
    );

    let code = render_file(&self.metadata(), namespace, &conversion.types, self.settings);
    let stats = GenerationStats::from_types(&conversion.types, conversion.warnings);

    Ok(GeneratedOutput { code, stats })
  }
}
