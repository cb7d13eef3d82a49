//! Request URL construction for the aviationweather.gov data server.

use crate::MetarError;

/// Data server endpoint used when no other base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://aviationweather.gov/api/data/dataserver";

pub const DATA_SOURCE: &str = "metars";
pub const REQUEST_TYPE: &str = "retrieve";
pub const FORMAT: &str = "xml";
/// Ask for only the newest report of each station inside the lookback window.
pub const MOST_RECENT_FOR_EACH_STATION: &str = "constraint";
pub const HOURS_BEFORE_NOW: &str = "1.25";

/// Station identifiers are separated by an encoded space.
const STATION_SEPARATOR: &str = "%20";

/// Build the request URL against [`DEFAULT_BASE_URL`].
pub fn build_query_url<S: AsRef<str>>(stations: &[S]) -> Result<String, MetarError> {
    build_query_url_with_base(DEFAULT_BASE_URL, stations)
}

/// Build the request URL for `stations` against an arbitrary base URL.
///
/// Identifiers are trimmed and empty ones skipped; their syntax is not
/// checked, an unknown code simply matches no report.
pub fn build_query_url_with_base<S: AsRef<str>>(
    base_url: &str,
    stations: &[S],
) -> Result<String, MetarError> {
    let ids: Vec<&str> = stations
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(MetarError::usage());
    }

    Ok(format!(
        "{base}?dataSource={DATA_SOURCE}&requestType={REQUEST_TYPE}&format={FORMAT}\
         &mostRecentForEachStation={MOST_RECENT_FOR_EACH_STATION}\
         &hoursBeforeNow={HOURS_BEFORE_NOW}&stationString={ids}",
        base = base_url.trim_end_matches('?'),
        ids = ids.join(STATION_SEPARATOR),
    ))
}
