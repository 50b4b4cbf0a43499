use serde::{Deserialize, Serialize};
use tictactoe_common::GameMode;
pub(crate) use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";
const MAX_LABEL_LENGTH: usize = 24;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub labels: LabelConfig,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.labels.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    pub default_mode: GameMode,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LabelConfig {
    pub player_x: String,
    pub player_two: String,
    pub computer: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            player_x: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
            computer: "Robo".to_string(),
        }
    }
}

fn validate_label(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} label must not be empty", name));
    }
    if value.chars().count() > MAX_LABEL_LENGTH {
        return Err(format!(
            "{} label must not exceed {} characters",
            name, MAX_LABEL_LENGTH
        ));
    }
    Ok(())
}

impl Validate for LabelConfig {
    fn validate(&self) -> Result<(), String> {
        validate_label("player_x", &self.player_x)?;
        validate_label("player_two", &self.player_two)?;
        validate_label("computer", &self.computer)?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err("logging prefix must not be blank; omit it instead".to_string());
        }
        Ok(())
    }
}
