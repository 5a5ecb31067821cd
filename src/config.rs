//! Engine configuration: defaults, optional TOML file, env overrides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the chat engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Minimum cosine similarity for the fallback engine to resolve a
    /// candidate question instead of giving up.
    pub similarity_threshold: f64,
    /// Maximum announcements returned per query.
    pub announcement_limit: usize,
    /// Maximum complaints returned per query.
    pub complaint_limit: usize,
    /// Maximum exams returned per query.
    pub exam_limit: usize,
    /// Minimum numeric score that counts a prerequisite as passed.
    pub passing_score: f64,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            announcement_limit: 5,
            complaint_limit: 5,
            exam_limit: 5,
            passing_score: 60.0,
            log_level: "info".to_string(),
        }
    }
}

impl ChatConfig {
    /// Loads configuration: defaults, then the first config file found,
    /// then `CAMPUS_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        let defaults = ChatConfig::default();
        settings = settings.add_source(
            config::Config::try_from(&defaults).map_err(|e| Error::Config(e.to_string()))?,
        );

        let config_paths = ["campus-chat.toml", "config/campus-chat.toml"];
        for path in &config_paths {
            if std::path::Path::new(path).exists() {
                settings = settings.add_source(config::File::with_name(path));
                break;
            }
        }

        // Keys are flat and already contain underscores, so no separator:
        // CAMPUS_SIMILARITY_THRESHOLD maps to `similarity_threshold`.
        settings = settings
            .add_source(config::Environment::with_prefix("CAMPUS").try_parsing(true));

        settings
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }
}
