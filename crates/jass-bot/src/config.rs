use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

const DEFAULT_TRIALS: usize = 30;
const DEFAULT_SEED: u64 = 42;

/// Monte Carlo evaluation settings, typically embedded in a caller's YAML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EvaluationConfig {
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Spread trials over the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            parallel: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl EvaluationConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let mut cfg: EvaluationConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.trials == 0 {
            return Err(ValidationError::InvalidField {
                field: "trials".to_string(),
                message: "number of trials must be greater than zero".to_string(),
            });
        }
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.logging.tracing_level),
            });
        }
        Ok(())
    }
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Logging configuration defaults to no subscriber.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tracing_level: default_tracing_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

/// Errors surfaced when loading configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_YAML: &str = r#"
trials: 200
seed: 7
parallel: true
logging:
  enabled: true
  tracing_level: "debug"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let cfg = EvaluationConfig::from_yaml_str(BASIC_YAML).expect("valid config");
        assert_eq!(cfg.trials, 200);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.parallel);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert!(!cfg.logging.json);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = EvaluationConfig::from_yaml_str("{}").expect("defaults");
        assert_eq!(cfg, EvaluationConfig::default());
        assert_eq!(cfg.trials, DEFAULT_TRIALS);
    }

    #[test]
    fn rejects_zero_trials() {
        let yaml = BASIC_YAML.replace("trials: 200", "trials: 0");
        let err = EvaluationConfig::from_yaml_str(&yaml).expect_err("zero trials");
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::InvalidField { ref field, .. }) if field == "trials"
        ));
    }

    #[test]
    fn rejects_unknown_level() {
        let yaml = BASIC_YAML.replace("debug", "verbose");
        let err = EvaluationConfig::from_yaml_str(&yaml).expect_err("bad level");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn blank_level_falls_back_to_info() {
        let yaml = BASIC_YAML.replace("\"debug\"", "\"  \"");
        let cfg = EvaluationConfig::from_yaml_str(&yaml).expect("normalized");
        assert_eq!(cfg.logging.tracing_level, "info");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = EvaluationConfig::from_yaml_str("trials: [").expect_err("parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
