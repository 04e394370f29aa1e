use crate::types::{AgentCategory, Color};

/// Pick the background colour for a category: light blue for Chrome,
/// light green for everything else.
pub fn select_background(category: AgentCategory) -> Color {
    match category {
        AgentCategory::Chrome => Color::LightBlue,
        AgentCategory::Firefox | AgentCategory::Edge | AgentCategory::Other => Color::LightGreen,
    }
}
