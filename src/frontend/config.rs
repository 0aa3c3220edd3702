use anyhow::{Context, Result};
use gloo::utils::document;
use log::{info, warn};

use memory_game::GameConfig;

const CONFIG_ELEMENT_ID: &str = "memory-config";

/// Reads the optional JSON override embedded in the page, falling back to
/// the built-in defaults.
pub fn load() -> GameConfig {
    match from_document() {
        Ok(Some(config)) => {
            info!("using game config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => GameConfig::default(),
        Err(e) => {
            warn!("{:#}, using defaults", e);
            GameConfig::default()
        }
    }
}

fn from_document() -> Result<Option<GameConfig>> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    GameConfig::from_json(&text)
        .with_context(|| format!("invalid #{} element", CONFIG_ELEMENT_ID))
        .map(Some)
}
