use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use weather_core::Config;

/// Top-level CLI struct. Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Random city weather service")]
pub struct Cli {
    /// Path to a TOML config file. Defaults to the platform config directory.
    #[arg(short, long, env = "WEATHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. "0.0.0.0:5000".
    #[arg(short, long, env = "WEATHER_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Path to the city dataset (JSON).
    #[arg(long, env = "WEATHER_CITIES")]
    pub cities: Option<PathBuf>,

    /// Directory with the static front end.
    #[arg(long, env = "WEATHER_ASSETS")]
    pub assets: Option<PathBuf>,
}

impl Cli {
    /// Load the config file (explicit or default), apply the API key from
    /// the environment, then the command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::load_from(path)?;
                config.apply_env();
                config
            }
            None => Config::load()?,
        };

        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        if let Some(cities) = &self.cities {
            config.cities_path = cities.clone();
        }
        if let Some(assets) = &self.assets {
            config.assets_path = assets.clone();
        }
    }
}
