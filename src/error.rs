use std::path::PathBuf;

/// Errors raised while loading or validating a scenario.
/// The physics itself never fails; see [`crate::Body::step`]
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("parameter `{name}` must be {expected}, got {value}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },
}
