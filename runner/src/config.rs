use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::game::EngineSettings;

use crate::autopilot::Autopilot;

const CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

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
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub engine: EngineSettings,
    pub sessions: u32,
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub max_ticks: u64,
    #[serde(default = "default_autopilot")]
    pub autopilot: Autopilot,
}

fn default_autopilot() -> Autopilot {
    Autopilot::Greedy
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.engine.validate()?;
        if self.sessions == 0 {
            return Err("At least one session must be run".to_string());
        }
        if self.players.is_empty() {
            return Err("At least one player name is required".to_string());
        }
        if self.max_ticks == 0 {
            return Err("Max ticks must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            engine: EngineSettings::default(),
            sessions: 3,
            players: vec!["Player 1".to_string(), "Player 2".to_string(), "Player 3".to_string()],
            seed: None,
            max_ticks: 5000,
            autopilot: Autopilot::Greedy,
        }
    }
}

impl RunnerConfig {
    pub fn player_for_session(&self, index: usize) -> &str {
        &self.players[index % self.players.len()]
    }
}
