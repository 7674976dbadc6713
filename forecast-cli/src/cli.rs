use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::info;

use forecast_core::{Config, CsvStore, WeatherApiClient, plot};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Fetch and chart today's hourly forecast"
)]
pub struct Cli {
    /// Download and save forecast data for the given place.
    #[arg(long = "update_place", value_name = "PLACE")]
    pub update_place: Option<String>,

    /// Plot the graph from the stored forecast.
    #[arg(long)]
    pub plot: bool,
}

impl Cli {
    /// Dispatch the requested branches: update first, then plot.
    ///
    /// With neither flag given, usage is printed and nothing else runs. The
    /// credential is resolved before either branch, so a missing key fails
    /// ahead of any network or filesystem work.
    pub async fn run(self) -> anyhow::Result<()> {
        if self.update_place.is_none() && !self.plot {
            Cli::command()
                .print_help()
                .context("Failed to print usage")?;
            return Ok(());
        }

        let config = Config::from_env()?;
        let store = CsvStore::default();

        if let Some(place) = &self.update_place {
            let client = WeatherApiClient::new(config.api_key.clone());
            let record = client.fetch(place).await?;
            info!("{}", record.summary());
            store.write(&record)?;
        }

        if self.plot {
            let table = store.read()?;
            plot::render(&table)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn both_flags_can_be_combined() {
        let cli = Cli::try_parse_from(["forecast", "--update_place", "Oslo", "--plot"])
            .expect("flags must parse");

        assert_eq!(cli.update_place.as_deref(), Some("Oslo"));
        assert!(cli.plot);
    }

    #[test]
    fn bare_invocation_parses_as_idle() {
        let cli = Cli::try_parse_from(["forecast"]).expect("no flags must parse");

        assert!(cli.update_place.is_none());
        assert!(!cli.plot);
    }
}
