use quick_xml::DeError;
use serde::{Deserialize, de::Error as _};

use crate::{Metar, MetarError};

/// Top-level `<response>` document returned by the data server.
///
/// Only `time_taken_ms` and `data` are read; `request`, `errors`, `warnings`
/// and the rest are ignored.
#[derive(Debug, Deserialize)]
struct DataServerResponse {
    #[serde(default)]
    time_taken_ms: u64,
    #[serde(default)]
    data: DataServerData,
}

#[derive(Debug, Default, Deserialize)]
struct DataServerData {
    #[serde(rename = "METAR", default)]
    metars: Vec<Metar>,
}

/// Decode a data server response body into reports, in document order.
///
/// A document without any `METAR` element is not an error. Bytes that are
/// not valid UTF-8 are.
pub fn parse_response(body: &[u8]) -> Result<Vec<Metar>, MetarError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| DeError::custom(format!("response is not valid UTF-8: {e}")))?;
    let response: DataServerResponse = quick_xml::de::from_str(text)?;

    log::debug!(
        "data server answered in {} ms with {} report(s)",
        response.time_taken_ms,
        response.data.metars.len()
    );

    Ok(response.data.metars)
}
