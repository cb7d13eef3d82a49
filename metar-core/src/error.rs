use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a `metar` run.
///
/// None of these are recovered from; the binary reports the message and exits.
#[derive(Debug, Error)]
pub enum MetarError {
    /// No station identifiers were supplied.
    #[error("usage: metar ICAO1 ICAO2 ...{}", hint_suffix(.hint))]
    Usage { hint: Option<String> },

    /// The request could not be sent or its body could not be read.
    #[error("request to the weather service failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not the XML document we expect.
    #[error("couldn't parse XML response: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// The station dotfile could not be read, parsed or written.
    #[error("{action} config file {}: {message}", .path.display())]
    Config {
        action: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl MetarError {
    pub fn usage() -> Self {
        MetarError::Usage { hint: None }
    }

    pub fn usage_with_hint(hint: impl Into<String>) -> Self {
        MetarError::Usage { hint: Some(hint.into()) }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(h) => format!("\nHint: {h}"),
        None => String::new(),
    }
}
