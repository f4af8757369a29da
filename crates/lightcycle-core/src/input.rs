use std::fmt;

/// Identifier of a pressed key, named the way DOM `KeyboardEvent.key` names it
/// (`"w"`, `"ArrowUp"`, `"Enter"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key identifier for a printable character.
    pub fn from_char(c: char) -> Self {
        Self(c.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_and_str_agree() {
        assert_eq!(KeyId::from_char('w'), KeyId::from("w"));
        assert_eq!(KeyId::from("ArrowUp").as_str(), "ArrowUp");
    }

    #[test]
    fn case_is_significant() {
        assert_ne!(KeyId::from_char('W'), KeyId::from_char('w'));
    }
}
