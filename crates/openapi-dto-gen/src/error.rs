use std::path::PathBuf;

/// Failure classes surfaced to the caller, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ErrorClass {
  /// Input missing or empty; nothing was attempted.
  #[strum(to_string = "precondition")]
  Precondition,
  /// The source document could not be read or fetched.
  #[strum(to_string = "io")]
  Io,
  /// Parsing, conversion or writing the generated file failed.
  #[strum(to_string = "generation")]
  Generation,
}

impl ErrorClass {
  #[must_use]
  pub const fn exit_code(self) -> u8 {
    match self {
      Self::Precondition => 3,
      Self::Io => 4,
      Self::Generation => 5,
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
  #[error("{} does not exists!. Check if the path is correct.", path.display())]
  InputNotFound { path: PathBuf },

  #[error("The content from {origin} is empty. Exiting generation.")]
  EmptyContent { origin: String },

  #[error("Error reading from file '{}'. {source}", path.display())]
  ReadFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Error reading from url '{url}'. {source}")]
  Fetch {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Error parsing OpenAPI document. {message}")]
  Parse { message: String },

  #[error("Error generating code. {message}")]
  Convert { message: String },

  #[error("Error writing generated code to '{}'. {source}", path.display())]
  WriteOutput {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl GenerateError {
  #[must_use]
  pub const fn class(&self) -> ErrorClass {
    match self {
      Self::InputNotFound { .. } | Self::EmptyContent { .. } => ErrorClass::Precondition,
      Self::ReadFile { .. } | Self::Fetch { .. } => ErrorClass::Io,
      Self::Parse { .. } | Self::Convert { .. } | Self::WriteOutput { .. } => ErrorClass::Generation,
    }
  }
}
