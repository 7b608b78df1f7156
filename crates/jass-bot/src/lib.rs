pub mod config;
pub mod logging;
pub mod policy;
pub mod sim;

pub use config::{ConfigError, EvaluationConfig, LoggingConfig, ValidationError};
pub use logging::init_logging;
pub use policy::{HeuristicPolicy, Policy, PolicyContext};
pub use sim::{
    Evaluator, ModeEstimates, RoundOutcome, SimulationError, TrickSummary, deal_opponents,
    estimate_expected_score, simulate_round, simulate_round_with,
};
