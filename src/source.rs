// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Loading spinner documents from the network or from disk.
//!
//! The network path issues exactly one GET request. There is no retry and no
//! status check: a non-success response is logged and its body is handed to
//! the JSON parser, which is where such a run fails.

use std::{fs, path::Path};

use tracing::{debug, info, warn};

use crate::{
    error::{self, Error},
    spinner::SpinnerCollection,
};

/// Downloads and parses the spinner document at `url`.
///
/// # Errors
///
/// Returns [`Error::Fetch`](Error::Fetch) when the request cannot be sent or
/// the body cannot be read, and [`Error::Parse`](Error::Parse) when the body
/// is not a spinner mapping.
///
/// # Example
///
/// ```no_run
/// use spinner_variants::{DEFAULT_SOURCE_URL, fetch_spinners};
///
/// # async fn example() -> Result<(), spinner_variants::Error> {
/// let spinners = fetch_spinners(DEFAULT_SOURCE_URL,).await?;
/// println!("{} spinners available", spinners.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_spinners(url: &str,) -> Result<SpinnerCollection, Error,>
{
    info!("Fetching spinner definitions from {}", url);
    let response = reqwest::get(url,).await.map_err(|source| error::fetch_error(url, source,),)?;

    let status = response.status();
    if !status.is_success() {
        warn!("Spinner source {} answered with {}, parsing body anyway", url, status);
    }

    let body = response.text().await.map_err(|source| error::fetch_error(url, source,),)?;
    debug!("Received {} bytes from {}", body.len(), url);

    parse_spinners(&body,)
}

/// Reads and parses a spinner document stored on disk.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when its contents are not a spinner mapping.
pub fn load_spinners(path: &Path,) -> Result<SpinnerCollection, Error,>
{
    info!("Reading spinner definitions from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_spinners(&contents,)
}

/// Parses a JSON object mapping spinner names to definitions.
///
/// Entry order of the document is preserved.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when decoding fails.
///
/// # Examples
///
/// ```
/// use spinner_variants::parse_spinners;
///
/// let spinners = parse_spinners(r#"{"line":{"interval":130,"frames":["-","\\","|","/"]}}"#,)?;
/// assert_eq!(spinners.sorted_names(), vec!["line"]);
/// # Ok::<(), spinner_variants::Error>(())
/// ```
pub fn parse_spinners(contents: &str,) -> Result<SpinnerCollection, Error,>
{
    let collection: SpinnerCollection = serde_json::from_str(contents,)?;
    debug!("Parsed {} spinner definitions", collection.len());
    Ok(collection,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{fetch_spinners, load_spinners, parse_spinners};
    use crate::{Error, SpinnerDefinition};

    const DOCUMENT: &str = r#"{
        "dots": {"interval": 80, "frames": ["⠋", "⠙", "⠹"]},
        "line": {"interval": 130, "frames": ["-", "\\", "|", "/"]},
        "bounce": {"interval": 120, "frames": ["⠁", "⠂", "⠄", "⠂"]}
    }"#;

    #[test]
    fn parse_preserves_document_order()
    {
        let spinners = parse_spinners(DOCUMENT,).expect("valid document",);
        let names: Vec<&str,> = spinners.names().collect();
        assert_eq!(names, vec!["dots", "line", "bounce"]);
        assert_eq!(
            spinners.get("line"),
            Some(&SpinnerDefinition::new(130, ["-", "\\", "|", "/"],))
        );
    }

    #[test]
    fn parse_rejects_non_json_body()
    {
        let error = parse_spinners("<html>404: Not Found</html>",).unwrap_err();
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn parse_rejects_non_string_frames()
    {
        let error = parse_spinners(r#"{"dots":{"interval":80,"frames":[1,2]}}"#,).unwrap_err();
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn parse_accepts_empty_document()
    {
        let spinners = parse_spinners("{}",).expect("empty mapping is valid",);
        assert!(spinners.is_empty());
    }

    #[test]
    fn load_reads_document_from_disk()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("spinners.json",);
        fs::write(&path, DOCUMENT,).expect("failed to write document",);

        let spinners = load_spinners(&path,).expect("document should load",);
        assert_eq!(spinners.len(), 3);
    }

    #[test]
    fn load_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("absent.json",);

        let error = load_spinners(&path,).unwrap_err();
        match error {
            Error::Io {
                path: stored, ..
            } => assert_eq!(stored, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_reports_unusable_url()
    {
        let error = fetch_spinners("not a url",).await.unwrap_err();
        match error {
            Error::Fetch {
                url, ..
            } => assert_eq!(url, "not a url"),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}
