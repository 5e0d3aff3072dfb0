#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the generator crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Every failure is fatal to a generator run: nothing is retried and output
//! already emitted is not retracted.

use std::path::{Path, PathBuf};

/// Unified error type returned by the loader, the emitter and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading inputs or writing the
    /// generated module to a file.
    #[error("failed to access {path:?}: {source}")]
    Io {
        /// Location of the file that could not be accessed.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Transport failure while downloading the spinner document.
    #[error("failed to fetch spinner definitions from {url}: {source}")]
    Fetch {
        /// Source URL that was requested.
        url:    String,
        /// Underlying HTTP client error.
        source: reqwest::Error
    },
    /// The spinner document is not a JSON mapping of spinner definitions.
    #[error("failed to parse spinner definitions: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Wraps YAML decoding errors of the generator configuration.
    #[error("failed to parse configuration: {source}")]
    Config {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the configuration or CLI input is unusable.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Writing generated text to the output stream failed.
    #[error("failed to write generated module: {source}")]
    Emit {
        /// Underlying I/O error reported by the writer.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation
    /// and is what the CLI prints on the error stream.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Config {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Fetch`] variant capturing the requested URL.
pub fn fetch_error(url: &str, source: reqwest::Error) -> Error {
    Error::Fetch {
        url: url.to_owned(),
        source
    }
}

/// Creates an [`Error::Emit`] variant from a failed write.
pub fn emit_error(source: std::io::Error) -> Error {
    Error::Emit {
        source
    }
}
