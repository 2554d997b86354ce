use std::{
  ffi::OsStr,
  fmt,
  path::{Path, PathBuf},
};

use oas3::OpenApiV3Spec;
use reqwest::{Client, Response, Url};
use tracing::debug;

use super::nullable::apply_nullable_keyword;
use crate::error::GenerateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }

  /// Detects the format from the URL path; query strings and unparsable URLs fall back to JSON.
  #[must_use]
  pub fn from_url(url: &str) -> Self {
    Url::parse(url).map_or(Self::default(), |url| Self::from_path(Path::new(url.path())))
  }
}

/// Where a source document came from, for messages and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
  File(PathBuf),
  Url(String),
}

impl fmt::Display for SourceOrigin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::File(path) => write!(f, "file '{}'", path.display()),
      Self::Url(url) => write!(f, "url '{url}'"),
    }
  }
}

/// Raw text of an OpenAPI document together with its format and origin.
#[derive(Debug, Clone)]
pub struct SourceDocument {
  pub text: String,
  pub format: SpecFormat,
  pub origin: SourceOrigin,
}

impl SourceDocument {
  #[must_use]
  pub fn is_blank(&self) -> bool {
    self.text.trim().is_empty()
  }

  /// Fails with [`GenerateError::EmptyContent`] when the text is empty or whitespace only.
  pub fn ensure_content(self) -> Result<Self, GenerateError> {
    if self.is_blank() {
      return Err(GenerateError::EmptyContent {
        origin: self.origin.to_string(),
      });
    }
    Ok(self)
  }

  /// Parses the document, applying the OpenAPI 3.0 `nullable` keyword to its schemas.
  pub fn parse(&self) -> Result<oas3::Spec, GenerateError> {
    let parsed = match self.format {
      SpecFormat::Json => serde_json::from_str::<OpenApiV3Spec>(&self.text).map_err(|e| e.to_string()),
      SpecFormat::Yaml => oas3::from_yaml(&self.text).map_err(|e| e.to_string()),
    };
    let mut spec = parsed.map_err(|message| GenerateError::Parse { message })?;

    if self.text.contains("nullable") {
      match self.raw_value() {
        Ok(raw) => {
          let marked = apply_nullable_keyword(&raw, &mut spec);
          debug!(marked, "applied nullable keyword");
        }
        Err(message) => debug!(%message, "nullable keyword not applied"),
      }
    }
    Ok(spec)
  }

  fn raw_value(&self) -> Result<serde_json::Value, String> {
    match self.format {
      SpecFormat::Json => serde_json::from_str(&self.text).map_err(|e| e.to_string()),
      SpecFormat::Yaml => serde_yaml::from_str(&self.text).map_err(|e| e.to_string()),
    }
  }
}

pub async fn read_file(path: &Path) -> Result<SourceDocument, GenerateError> {
  let text = tokio::fs::read_to_string(path)
    .await
    .map_err(|source| GenerateError::ReadFile {
      path: path.to_path_buf(),
      source,
    })?;
  debug!(path = %path.display(), bytes = text.len(), "read source document");

  Ok(SourceDocument {
    text,
    format: SpecFormat::from_path(path),
    origin: SourceOrigin::File(path.to_path_buf()),
  })
}

/// Downloads a document with a GET request; non-success statuses are errors.
pub async fn fetch_url(client: &Client, url: &str) -> Result<SourceDocument, GenerateError> {
  let to_error = |source| GenerateError::Fetch {
    url: url.to_string(),
    source,
  };

  let response = client
    .get(url)
    .send()
    .await
    .and_then(Response::error_for_status)
    .map_err(to_error)?;
  let status = response.status();
  let text = response.text().await.map_err(to_error)?;
  debug!(%url, %status, bytes = text.len(), "fetched source document");

  Ok(SourceDocument {
    text,
    format: SpecFormat::from_url(url),
    origin: SourceOrigin::Url(url.to_string()),
  })
}
