//! Generator configuration describing where spinners come from and how the
//! Gren module is shaped.
//!
//! Every value has a default that reproduces the canonical generator run, so
//! a configuration file is optional. When one is supplied it is a YAML
//! document whose keys mirror [`GeneratorConfig`]; omitted keys keep their
//! defaults.

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Location of the upstream cli-spinners catalogue.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/sindresorhus/cli-spinners/refs/heads/main/spinners.json";

/// Spinners that never make it into the generated module.
pub const DEFAULT_DENYLIST: &[&str] = &["arrow2", "line2", "dwarfFortress", "weather"];

/// Complete set of knobs passed into the transformer at call time.
///
/// # Examples
///
/// ```
/// use spinner_variants::{EscapeMode, GeneratorConfig};
///
/// let yaml = r#"
/// denylist: [dots]
/// escape: all
/// "#;
/// let config: GeneratorConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert!(config.denylist.contains("dots"));
/// assert!(!config.denylist.contains("weather"));
/// assert_eq!(config.escape, EscapeMode::All);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// URL of the JSON document fetched when no local input is given.
    #[serde(deserialize_with = "deserialize_source_url")]
    pub source_url: String,

    /// Spinner names removed before any rendering happens.
    pub denylist: Denylist,

    /// Export list and doc comment layout of the generated module.
    pub header: HeaderStyle,

    /// Backslash handling applied to every frame string.
    pub escape: EscapeMode
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            denylist:   Denylist::default(),
            header:     HeaderStyle::default(),
            escape:     EscapeMode::default()
        }
    }
}

/// Set of spinner names excluded from the generated module.
///
/// Membership is exact and case-sensitive.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Denylist {
    names: BTreeSet<String>
}

impl Denylist {
    /// Creates a denylist from arbitrary names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            names: names.into_iter().map(Into::into).collect()
        }
    }

    /// Returns `true` when `name` must be dropped.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over the denied names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().copied())
    }
}

/// Layout switches covering the observed revisions of the generated module.
///
/// The default exposes `Variant` plus every spinner and carries the full set
/// of doc comments.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderStyle {
    /// Adds the aggregate `all` table to the export list and `@docs` line.
    pub expose_table: bool,

    /// Emits the module doc block, the type alias doc comment and the empty
    /// `{-|-}` comment before every declaration.
    pub doc_comments: bool
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            expose_table: false,
            doc_comments: true
        }
    }
}

/// Backslash escaping strategy for frame strings.
///
/// Only backslashes are ever touched. Quotes, newlines and control
/// characters pass through verbatim.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EscapeMode {
    /// Double the first backslash of each frame and leave the rest alone.
    #[default]
    FirstOccurrence,
    /// Double every backslash.
    All
}

/// Loads a generator configuration from the YAML file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Config`](Error::Config) when the YAML is malformed or contains
/// unknown keys.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses a generator configuration from a YAML string.
///
/// An empty document yields [`GeneratorConfig::default`].
///
/// # Errors
///
/// Returns [`Error::Config`](Error::Config) when decoding fails.
pub fn parse_config(contents: &str) -> Result<GeneratorConfig, Error> {
    if contents.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }

    Ok(serde_yaml::from_str(contents)?)
}

fn deserialize_source_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>
{
    let value = String::deserialize(deserializer)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(serde::de::Error::custom("source_url cannot be empty"));
    }
    Ok(trimmed.to_owned())
}
