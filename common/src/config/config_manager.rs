use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config; falls back to `TConfig::default()`
/// when nothing is stored yet.
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
    pub fn from_yaml_file(file_path: &str) -> Self {
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
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
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

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        delay_ms: u64,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { delay_ms: 500 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 1000 {
                return Err("delay_ms too large".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(InMemoryConfigProvider::new(None), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_set_then_get() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(InMemoryConfigProvider::new(None), YamlConfigSerializer::new());
        manager.set_config(&SampleConfig { delay_ms: 42 }).unwrap();
        assert_eq!(manager.get_config().unwrap().delay_ms, 42);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let provider = InMemoryConfigProvider::new(Some("delay_ms: 5000\n".to_string()));
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Config validation error"));
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(InMemoryConfigProvider::new(None), YamlConfigSerializer::new());
        assert!(manager.set_config(&SampleConfig { delay_ms: 2000 }).is_err());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let provider = InMemoryConfigProvider::new(Some("delay_ms: [not a number".to_string()));
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }
}
