mod classifier;
mod db;
mod error;
mod matcher;
mod style;
mod types;

pub use classifier::{classify, AgentClassifier};
pub use error::{Error, Result};
pub use style::select_background;
pub use types::*;
