use anyhow::Context;
use clap::Parser;
use metar_core::{AviationWeatherProvider, Config, MetarError, fetch_metars, query::DEFAULT_BASE_URL};
use std::{io, path::PathBuf, time::Duration};

use crate::render::{RenderOptions, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "metar", version, about = "Latest METARs, colored by flight category")]
pub struct Cli {
    /// Station identifiers, e.g. KJFK EGLL.
    pub stations: Vec<String>,

    /// Read stations from the dotfile instead of the command line.
    #[arg(short = 'c', long, conflicts_with = "stations")]
    pub from_config: bool,

    /// Dotfile to read or write; defaults to ~/.metar.json.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store the given stations in the dotfile before fetching.
    #[arg(long, requires = "stations")]
    pub save: bool,

    /// Append the observation time to each report.
    #[arg(short = 't', long)]
    pub time: bool,

    /// Request timeout in seconds, at least 1; no timeout unless set.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Data server endpoint.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub endpoint: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let stations = self.resolve_stations()?;
        log::debug!("requesting {} station(s): {}", stations.len(), stations.join(" "));

        let provider = AviationWeatherProvider::with_options(
            &self.endpoint,
            self.timeout.map(Duration::from_secs),
        )
        .context("Failed to set up HTTP client")?;

        let metars = fetch_metars(&provider, &stations).await?;
        if metars.is_empty() {
            log::warn!("no reports returned for {}", stations.join(" "));
        }

        let options = RenderOptions { show_time: self.time };
        render(&mut io::stdout().lock(), &metars, options).context("Failed to write reports")?;

        Ok(())
    }

    /// Stations from the command line, or from the dotfile with `--from-config`.
    fn resolve_stations(&self) -> anyhow::Result<Vec<String>> {
        if self.from_config {
            let path = self.config_path()?;
            let config = Config::load_from(&path)?;
            return Ok(config.stations_or_usage(&path)?.to_vec());
        }

        if self.stations.iter().all(|s| s.trim().is_empty()) {
            return Err(MetarError::usage().into());
        }

        if self.save {
            let path = self.config_path()?;
            Config::new(self.stations.clone()).save_to(&path)?;
        }

        Ok(self.stations.clone())
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_file_path()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("metar").chain(args.iter().copied()))
            .expect("arguments must parse")
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_stations_are_collected_in_order() {
        let cli = parse(&["KJFK", "KEWR", "-t"]);
        assert_eq!(cli.stations, ["KJFK", "KEWR"]);
        assert!(cli.time);
        assert_eq!(cli.endpoint, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout, None);
    }

    #[test]
    fn no_stations_is_a_usage_error() {
        let cli = parse(&[]);
        let err = cli.resolve_stations().unwrap_err();

        let usage = err.downcast_ref::<MetarError>().expect("usage error");
        assert!(matches!(usage, MetarError::Usage { .. }));
    }

    #[test]
    fn timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["metar", "--timeout", "0", "KJFK"]).is_err());

        let cli = parse(&["--timeout", "30", "KJFK"]);
        assert_eq!(cli.timeout, Some(30));
    }

    #[test]
    fn save_requires_stations() {
        let res = Cli::try_parse_from(["metar", "--save"]);
        assert!(res.is_err());
    }

    #[test]
    fn from_config_conflicts_with_stations() {
        let res = Cli::try_parse_from(["metar", "--from-config", "KJFK"]);
        assert!(res.is_err());
    }

    #[test]
    fn from_config_reads_the_dotfile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".metar.json");
        std::fs::write(&path, r#"{"stations": ["KBOS", "KORD"]}"#).unwrap();

        let cli = parse(&["--from-config", "--config", path.to_str().unwrap()]);
        assert_eq!(cli.resolve_stations().unwrap(), ["KBOS", "KORD"]);
    }

    #[test]
    fn from_config_with_missing_dotfile_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".metar.json");

        let cli = parse(&["-c", "--config", path.to_str().unwrap()]);
        let err = cli.resolve_stations().unwrap_err();
        assert!(err.to_string().contains("no stations configured"));
    }

    #[test]
    fn save_writes_the_dotfile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".metar.json");

        let cli = parse(&["--save", "--config", path.to_str().unwrap(), "EGLL", "LFPG"]);
        assert_eq!(cli.resolve_stations().unwrap(), ["EGLL", "LFPG"]);

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.stations, ["EGLL", "LFPG"]);
    }
}
