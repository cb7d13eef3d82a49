//! Core library for the `metar` CLI.
//!
//! This crate defines:
//! - The station dotfile
//! - Query construction for the aviationweather.gov data server
//! - Abstraction over the report provider
//! - The METAR data model and XML decoding
//!
//! It is used by `metar-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;
pub mod query;

pub use config::Config;
pub use error::MetarError;
pub use model::{FlightCategory, Metar, SkyCondition, sort_by_raw_text};
pub use parse::parse_response;
pub use provider::{AviationWeatherProvider, MetarProvider, fetch_metars};
pub use query::build_query_url;
