use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::Player;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_SELF_PLAY_GAMES: u32 = 10_000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub human_mark: Player,
    #[serde(default)]
    pub seed: Option<u64>,
    pub self_play_games: u32,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.self_play_games == 0 || self.self_play_games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self_play_games must be between 1 and {}",
                MAX_SELF_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            human_mark: Player::X,
            seed: None,
            self_play_games: 10,
            verbose: false,
        }
    }
}
