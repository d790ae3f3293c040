use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::log;
use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    fn cached(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|e| format!("Config cache lock poisoned: {}", e))
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            log!("No config found, using defaults");
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.cached()? = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use crate::game::{Cell, EngineSettings};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_engine_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_config_returns_default() {
        let manager: ConfigManager<_, EngineSettings, _> =
            ConfigManager::new(InMemoryConfigProvider::new(None), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, EngineSettings, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_saved_config_is_loaded_back_from_file() {
        let settings = EngineSettings {
            initial_period_ms: 200,
            target_start: Cell::new(30, 30),
            ..EngineSettings::default()
        };
        let file_path = get_temp_file_path();

        let manager = ConfigManager::from_yaml_file(file_path.clone());
        assert!(manager.set_config(&settings).is_ok());

        let fresh: ConfigManager<_, EngineSettings, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager: ConfigManager<_, EngineSettings, _> =
            ConfigManager::new(InMemoryConfigProvider::new(None), YamlConfigSerializer::new());
        let invalid = EngineSettings {
            snake_start: vec![Cell::new(5, 5)],
            ..EngineSettings::default()
        };
        assert!(manager.set_config(&invalid).is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            canvas_size: 400
            scale: 10
            initial_period_ms: 10
            min_period_ms: 20
            period_step_ms: 4
            score_per_target: 10
            snake_start:
              - { x: 5, y: 5 }
              - { x: 4, y: 5 }
            target_start: { x: 20, y: 4 }
            leaderboard_size: 10
        "#;
        let manager: ConfigManager<_, EngineSettings, _> = ConfigManager::new(
            InMemoryConfigProvider::new(Some(invalid_config_content.to_string())),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let manager: ConfigManager<_, EngineSettings, _> = ConfigManager::new(
            InMemoryConfigProvider::new(Some("canvas_size: [".to_string())),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }
}
