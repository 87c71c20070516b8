use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::log;
use serde::{Deserialize, Serialize};

use super::tictactoe_lobby_config::TicTacToeLobbyConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_default_config_path()),
    }
}

/// A missing file yields defaults. A file that cannot be read, parsed or
/// validated is an error and stays untouched on disk.
pub fn load_config(manager: &ClientConfigManager) -> Result<Config, String> {
    manager.get_config().map_err(|e| {
        log!("Failed to load config: {}", e);
        e
    })
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeLobbyConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()
    }
}
