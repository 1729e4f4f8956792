/// Quick-pick names shown under the input field.
pub const QUICK_EXAMPLES: [&str; 4] = ["张伟", "Nguyễn Văn An", "Smith", "राज कुमार"];

/// Current contents of the name field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    text: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Submission is refused for blank input and while a request is in flight.
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && !self.is_blank()
    }

    /// Copies an example's literal text into the field. Never submits.
    pub fn pick_example(&mut self, example: &str) {
        self.text.clear();
        self.text.push_str(example);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_cannot_submit() {
        let mut input = NameInput::new();
        assert!(!input.can_submit(false));

        input.set_text("  \t\n ");
        assert!(input.is_blank());
        assert!(!input.can_submit(false));
    }

    #[test]
    fn test_busy_blocks_submission() {
        let mut input = NameInput::new();
        input.set_text("Smith");
        assert!(input.can_submit(false));
        assert!(!input.can_submit(true));
    }

    #[test]
    fn test_pick_example_replaces_text() {
        let mut input = NameInput::new();
        input.set_text("something else");
        input.pick_example("Nguyễn Văn An");
        assert_eq!(input.text(), "Nguyễn Văn An");
    }
}
