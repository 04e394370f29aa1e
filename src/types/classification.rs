/// Category of an agent string together with its derived background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: super::AgentCategory,
    pub background: super::Color,
}

impl Classification {
    pub fn category(&self) -> super::AgentCategory {
        self.category
    }
    pub fn background(&self) -> super::Color {
        self.background
    }
    pub fn is_chrome(&self) -> bool {
        self.category == super::AgentCategory::Chrome
    }
}
