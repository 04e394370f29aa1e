use std::fmt;

/// Coarse browser family derived from an agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentCategory {
    Chrome,
    Firefox,
    Edge,
    Other,
}

impl AgentCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "firefox" => Some(Self::Firefox),
            "edge" => Some(Self::Edge),
            "other" | "otro" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Edge => "Edge",
            Self::Other => "Other",
        }
    }

    /// Background colour used when rendering for this category.
    pub fn background(&self) -> super::Color {
        crate::style::select_background(*self)
    }
}

impl fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for c in [
            AgentCategory::Chrome,
            AgentCategory::Firefox,
            AgentCategory::Edge,
            AgentCategory::Other,
        ] {
            assert_eq!(AgentCategory::from_str(c.as_str()), Some(c));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(AgentCategory::from_str("FIREFOX"), Some(AgentCategory::Firefox));
        assert_eq!(AgentCategory::from_str("Otro"), Some(AgentCategory::Other));
        assert_eq!(AgentCategory::from_str("Safari"), None);
    }
}
