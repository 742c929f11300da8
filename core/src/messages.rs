//! User-facing message output.
//!
//! Confirmations, errors and reports are plain text lines pushed into a sink.
//! Ordering inside one operation matters (border lines surround content), so
//! sinks must preserve push order.

/// Destination for user-facing lines.
pub trait MessageSink {
    fn push(&mut self, line: String);

    fn extend(&mut self, lines: Vec<String>) {
        for line in lines {
            self.push(line);
        }
    }
}

/// In-memory sink, drained by the command adapter after each command.
#[derive(Debug, Clone, Default)]
pub struct MessageBuffer {
    lines: Vec<String>,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take all buffered lines, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl MessageSink for MessageBuffer {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut buf = MessageBuffer::new();
        buf.push("first".to_string());
        buf.extend(vec!["second".to_string(), "third".to_string()]);
        assert_eq!(buf.lines().len(), 3);

        let lines = buf.drain();
        assert_eq!(lines, vec!["first", "second", "third"]);
        assert!(buf.is_empty());
    }
}
