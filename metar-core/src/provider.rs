use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Metar, MetarError, model::sort_by_raw_text, parse::parse_response};

pub mod aviationweather;

pub use aviationweather::AviationWeatherProvider;

/// A source of raw data server responses.
#[async_trait]
pub trait MetarProvider: Send + Sync + Debug {
    /// Request reports for `stations` and return the response body untouched.
    ///
    /// Fails with [`MetarError::Usage`] before any I/O when `stations` holds
    /// no usable identifier.
    async fn fetch_raw(&self, stations: &[String]) -> Result<Vec<u8>, MetarError>;
}

/// Fetch, parse and sort the latest report of every station.
pub async fn fetch_metars<P>(provider: &P, stations: &[String]) -> Result<Vec<Metar>, MetarError>
where
    P: MetarProvider + ?Sized,
{
    let body = provider.fetch_raw(stations).await?;
    let mut metars = parse_response(&body)?;
    sort_by_raw_text(&mut metars);
    Ok(metars)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::query::build_query_url;

    /// Serves a canned body and counts how often it was asked.
    #[derive(Debug)]
    struct CannedProvider {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl CannedProvider {
        fn new(body: &'static str) -> Self {
            Self { body, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl MetarProvider for CannedProvider {
        async fn fetch_raw(&self, stations: &[String]) -> Result<Vec<u8>, MetarError> {
            build_query_url(stations)?;
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const TWO_REPORTS: &str = r#"<response><data>
    <METAR><raw_text>KJFK 251951Z 18010KT 10SM CLR 22/12 A3012</raw_text><flight_category>VFR</flight_category></METAR>
    <METAR><raw_text>KEWR 251951Z 20015KT 3SM HZ OVC008 19/17 A2995</raw_text><flight_category>IFR</flight_category></METAR>
  </data></response>"#;

    fn stations(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn returns_reports_sorted_by_raw_text() {
        let provider = CannedProvider::new(TWO_REPORTS);
        let metars = fetch_metars(&provider, &stations(&["KJFK", "KEWR"])).await.unwrap();

        let raw: Vec<_> = metars.iter().map(|m| &m.raw_text[..4]).collect();
        assert_eq!(raw, ["KEWR", "KJFK"]);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_stations_fails_before_fetching() {
        let provider = CannedProvider::new(TWO_REPORTS);
        let err = fetch_metars(&provider, &[]).await.unwrap_err();

        assert!(matches!(err, MetarError::Usage { .. }));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let provider = CannedProvider::new("<response><data><METAR>");
        let err = fetch_metars(&provider, &stations(&["KJFK"])).await.unwrap_err();
        assert!(matches!(err, MetarError::Parse(_)));
    }

    #[tokio::test]
    async fn works_through_a_trait_object() {
        let provider: Box<dyn MetarProvider> = Box::new(CannedProvider::new(
            "<response><data num_results=\"0\"></data></response>",
        ));
        let metars = fetch_metars(provider.as_ref(), &stations(&["ZZZZ"])).await.unwrap();
        assert!(metars.is_empty());
    }
}
