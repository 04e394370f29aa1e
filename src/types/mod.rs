mod agent_category;
mod classification;
mod color;

pub use agent_category::*;
pub use classification::*;
pub use color::*;
