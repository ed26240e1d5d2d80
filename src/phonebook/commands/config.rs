use crate::commands::{CmdMessage, CmdResult, PhonebookPaths};
use crate::config::PhonebookConfig;
use crate::error::{PhonebookError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings in `config.json` beside the record document.
///
/// Unknown keys and rejected values are `Config` errors; nothing is written for them.
pub fn run(paths: &PhonebookPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    let mut config = PhonebookConfig::load(dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = lookup(&config, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).inspect_err(|e| {
                tracing::warn!("Rejected config {}={:?}: {}", key, value, e);
            })?;
            config.save(dir)?;
            tracing::info!("Config {} set to {}", key, value);

            let stored = lookup(&config, &key)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result)
        }
    }
}

fn lookup(config: &PhonebookConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| PhonebookError::Config(format!("Unknown config key: {}", key)))
}
