use std::path::PathBuf;

use reqwest::Client;
use tracing::debug;

use super::{CommandOutcome, generate_from, log_failure};
use crate::{error::GenerateError, generator::DtoGenerator, utils::spec};

/// Fetches the document with `client` and generates from it. There is no
/// reachability pre-check; fetch failures surface as I/O errors.
pub async fn from_uri(
  generator: &DtoGenerator,
  client: &Client,
  url: &str,
  output: PathBuf,
  namespace: String,
) -> Result<CommandOutcome, GenerateError> {
  debug!(%url, output = %output.display(), %namespace, "from-uri");

  let source = spec::fetch_url(client, url).await.inspect_err(log_failure)?;
  generate_from(generator, source, output, namespace).await
}

#[cfg(test)]
mod tests {
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
  };

  use super::*;
  use crate::{error::ErrorClass, generator::settings::GeneratorSettings};

  fn generator() -> DtoGenerator {
    DtoGenerator::new(GeneratorSettings::dto_defaults())
  }

  async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(route))
      .respond_with(response)
      .mount(&server)
      .await;
    server
  }

  #[tokio::test]
  async fn test_generates_from_url() {
    let server = serve(
      "/swagger/v1/swagger.json",
      ResponseTemplate::new(200).set_body_string(include_str!("../../../fixtures/petstore.json")),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Petstore.cs");

    let outcome = from_uri(
      &generator(),
      &Client::new(),
      &format!("{}/swagger/v1/swagger.json", server.uri()),
      output.clone(),
      "Petstore".to_string(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.stats.types_generated, 7);
    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.contains("namespace Petstore"));
    assert!(code.contains("public long UserId { get; init; }"));
  }

  #[tokio::test]
  async fn test_empty_body_is_precondition_failure() {
    let server = serve("/empty.json", ResponseTemplate::new(200).set_body_string("   ")).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.cs");
    let url = format!("{}/empty.json", server.uri());

    let err = from_uri(&generator(), &Client::new(), &url, output.clone(), "MyNs".to_string())
      .await
      .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Precondition);
    assert_eq!(
      err.to_string(),
      format!("The content from url '{url}' is empty. Exiting generation.")
    );
    assert!(!output.exists());
  }

  #[tokio::test]
  #[tracing_test::traced_test]
  async fn test_http_error_status_is_io_failure() {
    let server = serve("/spec.json", ResponseTemplate::new(500)).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.cs");

    let err = from_uri(
      &generator(),
      &Client::new(),
      &format!("{}/spec.json", server.uri()),
      output.clone(),
      "MyNs".to_string(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GenerateError::Fetch { .. }));
    assert_eq!(err.class(), ErrorClass::Io);
    assert!(!output.exists());
    assert!(logs_contain("Error reading from url"));
  }

  #[tokio::test]
  async fn test_unreachable_host_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.cs");

    let err = from_uri(
      &generator(),
      &Client::new(),
      "http://127.0.0.1:9/spec.json",
      output.clone(),
      "MyNs".to_string(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Io);
    assert!(!output.exists());
  }
}
