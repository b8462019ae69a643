use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output/generated_data";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    input: Input,
    output: Output,
}

impl AppConfig {
    /// Reads `config` and `config_local` files (both optional) and `LOCATIONS__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(false))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("LOCATIONS").prefix_separator("__").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("output.directory", DEFAULT_OUTPUT_DIRECTORY)?
            .build()?
            .try_deserialize()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Input {
    file: Option<PathBuf>,
}

impl Input {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    directory: PathBuf,
}

impl Output {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
