use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit one classification line per answered question.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: default_verbose(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_verbose() -> bool {
    true
}
