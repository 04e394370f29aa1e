use std::fmt;

/// Background colour chosen for an agent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    LightBlue,
    LightGreen,
}

impl Color {
    /// CSS named-colour keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::LightBlue => "lightblue",
            Self::LightGreen => "lightgreen",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
