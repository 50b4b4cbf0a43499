use std::any::type_name;
use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize {}: {}", short_type_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize {}: {}", short_type_name::<TConfig>(), e))
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        mode: GameMode,
        label: String,
    }

    #[test]
    fn test_game_mode_is_written_by_variant_name() {
        let sample = Sample {
            mode: GameMode::VsComputer,
            label: "Robo".to_string(),
        };

        let yaml = YamlConfigSerializer::new().serialize(&sample).unwrap();

        assert!(yaml.contains("mode: VsComputer"), "{}", yaml);
    }

    #[test]
    fn test_deserialize_error_names_the_type() {
        let result: Result<Sample, String> =
            YamlConfigSerializer::new().deserialize("mode: Sideways\nlabel: x\n");

        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize Sample"), "{}", err);
    }
}
