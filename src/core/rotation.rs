use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

pub const MIN_ROTATION_SECONDS: u64 = 2;
pub const MAX_ROTATION_SECONDS: u64 = 60;

/// How the "Try: …" suggestion moves through the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RotationMode {
    Off,
    Interval { seconds: u64 },
    PerAnalysis,
}

impl Default for RotationMode {
    fn default() -> Self {
        RotationMode::Interval { seconds: 4 }
    }
}

impl RotationMode {
    pub fn period(&self) -> Option<Duration> {
        match self {
            RotationMode::Interval { seconds } => {
                Some(Duration::from_secs((*seconds).clamp(MIN_ROTATION_SECONDS, MAX_ROTATION_SECONDS)))
            }
            RotationMode::Off | RotationMode::PerAnalysis => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RotationMode::Off => "Off",
            RotationMode::Interval { .. } => "On a timer",
            RotationMode::PerAnalysis => "After each analysis",
        }
    }
}

/// Display cursor over a list of examples. Purely cosmetic: advancing or
/// reading an empty list is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleCursor {
    position: usize,
}

impl ExampleCursor {
    pub fn starting_at(position: usize) -> Self {
        Self { position }
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            self.position = 0;
            return;
        }
        self.position = (self.position % len + 1) % len;
    }

    pub fn index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.position % len)
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let items = ["a", "b", "c"];
        let mut cursor = ExampleCursor::default();
        assert_eq!(cursor.current(&items), Some(&"a"));
        cursor.advance(items.len());
        cursor.advance(items.len());
        assert_eq!(cursor.current(&items), Some(&"c"));
        cursor.advance(items.len());
        assert_eq!(cursor.current(&items), Some(&"a"));
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let items: [&str; 0] = [];
        let mut cursor = ExampleCursor::starting_at(7);
        assert_eq!(cursor.current(&items), None);
        cursor.advance(0);
        assert_eq!(cursor.index(0), None);
    }

    #[test]
    fn test_cursor_survives_shrinking_list() {
        let mut cursor = ExampleCursor::starting_at(13);
        assert_eq!(cursor.index(5), Some(3));
        cursor.advance(5);
        assert_eq!(cursor.index(5), Some(4));
    }

    #[test]
    fn test_rotation_period_is_clamped() {
        assert_eq!(RotationMode::Interval { seconds: 0 }.period(), Some(Duration::from_secs(2)));
        assert_eq!(
            RotationMode::Interval { seconds: 600 }.period(),
            Some(Duration::from_secs(MAX_ROTATION_SECONDS))
        );
        assert_eq!(RotationMode::PerAnalysis.period(), None);
        assert_eq!(RotationMode::Off.period(), None);
    }
}
