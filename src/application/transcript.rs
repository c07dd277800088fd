// src/application/transcript.rs

/// Running record of everything shown to and typed by the user in one session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    text: String,
    lines: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_output(&mut self, line: &str) {
        self.push(line);
    }

    pub fn record_input(&mut self, line: &str) {
        self.push(line);
    }

    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.lines += 1;
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_output_and_input_when_recording_then_keeps_order() {
        let mut transcript = Transcript::new();

        transcript.record_output("The card:");
        transcript.record_input("capital");

        assert_eq!(transcript.as_text(), "The card:\ncapital\n");
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn given_new_transcript_when_checking_then_is_empty() {
        assert!(Transcript::new().is_empty());
    }
}
