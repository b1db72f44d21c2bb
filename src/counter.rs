use serde::Serialize;
use std::fmt;

pub const DEFAULT_MESSAGE_LIMIT: usize = 500;

/// Live character count for the free-text message field.
#[derive(Debug, Clone, Copy)]
pub struct CharacterCounter {
    limit: usize,
}

/// A single reading of the counter, rendered as `"<length>/<limit> characters"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterReading {
    pub length: usize,
    pub limit: usize,
    /// The host highlights the counter when set. Input is never truncated.
    pub over_limit: bool,
}

impl CharacterCounter {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn read(&self, text: &str) -> CounterReading {
        let length = text.chars().count();
        CounterReading {
            length,
            limit: self.limit,
            over_limit: length > self.limit,
        }
    }
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_LIMIT)
    }
}

impl fmt::Display for CounterReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.length, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        let reading = CharacterCounter::default().read("héllo");
        assert_eq!(reading.length, 5);
        assert_eq!(reading.to_string(), "5/500 characters");
    }

    #[test]
    fn test_limit_itself_is_not_over() {
        let counter = CharacterCounter::new(3);
        assert!(!counter.read("abc").over_limit);
        assert!(counter.read("abcd").over_limit);
    }
}
