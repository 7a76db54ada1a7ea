use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value behind a content provider.
///
/// The first successful `get_config` is cached; `set_config` writes through
/// and replaces the cached value. A provider with no stored content yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
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
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.lock();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config: TConfig = self.config_serializer.deserialize(&config_data)?;
            config.validate().map_err(ConfigError::Invalid)?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.lock() = Some(config.clone());
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<TConfig>> {
        // The cached value is replaced wholesale, so a poisoned lock still
        // holds a consistent Option.
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        rounds: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                rounds: 3,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.rounds == 0 {
                return Err("rounds must be positive".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        let config: SampleConfig = manager.get_config().unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_set_then_get_through_file() {
        let file_path = get_temp_file_path();
        let config = SampleConfig {
            name: "file".to_string(),
            rounds: 7,
        };

        let writer = ConfigManager::from_yaml_file(file_path.clone());
        writer.set_config(&config).unwrap();

        let reader: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_set() {
        let manager = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        let result = manager.set_config(&SampleConfig {
            name: "bad".to_string(),
            rounds: 0,
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let provider = MemoryProvider::default();
        provider.set_config_content("name: bad\nrounds: 0\n").unwrap();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let result: Result<SampleConfig, _> = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_deserialize_error() {
        let provider = MemoryProvider::default();
        provider.set_config_content("rounds: [not, a, number]").unwrap();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let result: Result<SampleConfig, _> = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::default();
        provider.set_config_content("name: first\nrounds: 2\n").unwrap();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());

        let first: SampleConfig = manager.get_config().unwrap();
        manager
            .config_content_provider
            .set_config_content("name: second\nrounds: 4\n")
            .unwrap();
        let second: SampleConfig = manager.get_config().unwrap();

        assert_eq!(first, second);
        assert_eq!(second.name, "first");
    }
}
