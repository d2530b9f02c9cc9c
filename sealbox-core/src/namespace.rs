//! Logical-to-physical key mapping.

/// Derives physical store keys from logical keys under an optional
/// prefix.
///
/// For a fixed prefix the mapping is pure, deterministic, and injective:
/// `from_physical(to_physical(k)) == k` for every logical key `k`.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyNamespace {
    prefix: String,
}

impl KeyNamespace {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix; empty when namespacing is off.
    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Maps a logical key to its physical form.
    pub(crate) fn to_physical(&self, logical: &str) -> String {
        if self.prefix.is_empty() {
            logical.to_owned()
        } else {
            format!("{}:{logical}", self.prefix)
        }
    }

    /// Strips the `"{prefix}:"` marker from a physical key, or returns
    /// the key unchanged when no prefix is configured (or the key does
    /// not carry it).
    pub(crate) fn from_physical<'a>(&self, physical: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return physical;
        }
        physical
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(physical)
    }
}
