#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("unknown agent category {0:?}")]
    UnknownCategory(String),
    #[error("rule for {0} has no `contains` markers")]
    EmptyRule(String),
    #[error("category {0} already has a rule")]
    DuplicateRule(String),
    #[error("rule for {0} has an empty marker")]
    EmptyMarker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
