//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Conversion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub page: PageConfig,
    pub transcoder: TranscoderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputConfig {
    /// Export directory holding the chat file and its media
    pub directory: PathBuf,
    /// Transcript file name inside the export directory
    pub chat_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Root under which each run gets a timestamped directory
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PageConfig {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TranscoderConfig {
    pub enabled: bool,
    pub command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                directory: PathBuf::from("input/chat_history"),
                chat_file: "_chat.txt".to_string(),
            },
            output: OutputConfig {
                directory: PathBuf::from("output"),
            },
            page: PageConfig {
                title: "WhatsApp Chat Export".to_string(),
            },
            transcoder: TranscoderConfig {
                enabled: true,
                command: "ffmpeg".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(input) = std::env::var("CHATPAGE_INPUT") {
            config.input.directory = PathBuf::from(input);
        }

        if let Ok(output) = std::env::var("CHATPAGE_OUTPUT") {
            config.output.directory = PathBuf::from(output);
        }

        config
    }
}
