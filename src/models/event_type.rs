use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    Sleep,
    Wake,
}

impl EventType {
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sleep" => Some(Self::Sleep),
            "wake" => Some(Self::Wake),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Sleep => "sleep",
            EventType::Wake => "wake",
        }
    }

    /// The opposite transition (falling asleep ⇔ waking up).
    pub fn flip(self) -> Self {
        match self {
            EventType::Sleep => EventType::Wake,
            EventType::Wake => EventType::Sleep,
        }
    }

    pub fn is_sleep(&self) -> bool {
        matches!(self, EventType::Sleep)
    }

    pub fn is_wake(&self) -> bool {
        matches!(self, EventType::Wake)
    }
}
