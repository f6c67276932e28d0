//! Buffer for body text awaiting a flush.

/// Ordered text fragments collected since the last flush.
#[derive(Debug, Clone, Default)]
pub struct PendingBuffer {
    fragments: Vec<String>,
}

impl PendingBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty fragments are ignored.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }

    /// Join the fragments with single spaces, trim, and clear the buffer.
    ///
    /// Returns `None` when the trimmed text is empty; the buffer is cleared
    /// either way.
    pub fn take(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let joined = self.fragments.join(" ");
        self.fragments.clear();

        let text = joined.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Whether no fragments are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_joins_with_single_spaces() {
        let mut buffer = PendingBuffer::new();
        buffer.push("Human dignity");
        buffer.push("shall be inviolable.");

        assert!(!buffer.is_empty());
        assert_eq!(
            buffer.take(),
            Some("Human dignity shall be inviolable.".to_string())
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_take_empty_buffer() {
        let mut buffer = PendingBuffer::new();
        assert_eq!(buffer.take(), None);

        buffer.push("");
        assert!(buffer.is_empty());
        assert_eq!(buffer.take(), None);
    }

    #[test]
    fn test_take_whitespace_only_clears() {
        let mut buffer = PendingBuffer::new();
        buffer.push("   ");
        assert_eq!(buffer.take(), None);
        assert!(buffer.is_empty());
    }
}
