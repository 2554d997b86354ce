use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CommandOutcome, generate_from, log_failure};
use crate::{error::GenerateError, generator::DtoGenerator, utils::spec};

pub async fn from_file(
  generator: &DtoGenerator,
  file_name: &Path,
  output: PathBuf,
  namespace: String,
) -> Result<CommandOutcome, GenerateError> {
  debug!(file = %file_name.display(), output = %output.display(), %namespace, "from-file");

  if !is_existing_file(file_name).await {
    let err = GenerateError::InputNotFound {
      path: file_name.to_path_buf(),
    };
    log_failure(&err);
    return Err(err);
  }

  let source = spec::read_file(file_name).await.inspect_err(log_failure)?;
  generate_from(generator, source, output, namespace).await
}

async fn is_existing_file(path: &Path) -> bool {
  tokio::fs::metadata(path).await.is_ok_and(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{error::ErrorClass, generator::settings::GeneratorSettings};

  fn generator() -> DtoGenerator {
    DtoGenerator::new(GeneratorSettings::dto_defaults())
  }

  #[tokio::test]
  #[tracing_test::traced_test]
  async fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.json");
    let output = dir.path().join("out.cs");

    let err = from_file(&generator(), &input, output.clone(), "MyNs".to_string())
      .await
      .unwrap_err();

    assert!(matches!(err, GenerateError::InputNotFound { .. }));
    assert_eq!(err.class(), ErrorClass::Precondition);
    assert!(err.to_string().ends_with("missing.json does not exists!. Check if the path is correct."));
    assert!(!output.exists());
    assert!(logs_contain("does not exists"));
  }

  #[tokio::test]
  async fn test_directory_is_not_an_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.cs");

    let err = from_file(&generator(), dir.path(), output, "MyNs".to_string())
      .await
      .unwrap_err();
    assert!(matches!(err, GenerateError::InputNotFound { .. }));
  }

  #[tokio::test]
  async fn test_whitespace_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blank.json");
    std::fs::write(&input, "  \n\t\n").unwrap();
    let output = dir.path().join("out.cs");

    let err = from_file(&generator(), &input, output.clone(), "MyNs".to_string())
      .await
      .unwrap_err();

    assert!(matches!(err, GenerateError::EmptyContent { .. }));
    assert!(err.to_string().starts_with("The content from file '"));
    assert!(!output.exists());
  }

  #[tokio::test]
  async fn test_generates_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("minimal.json");
    std::fs::write(&input, include_str!("../../../fixtures/minimal.json")).unwrap();
    let output = dir.path().join("out.cs");

    let outcome = from_file(&generator(), &input, output.clone(), "MyNs".to_string())
      .await
      .unwrap();

    assert_eq!(outcome.output, output);
    assert_eq!(outcome.stats.types_generated, 1);
    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.contains("UserId"));
    assert!(!code.contains("User_id"));
  }
}
