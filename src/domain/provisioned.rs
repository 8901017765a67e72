//! Runtime values resolved during configure and consumed by create.

use std::fmt;

use zeroize::Zeroizing;

/// Resolved entry value. The buffer is wiped when dropped.
#[derive(Clone)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: String) -> Self {
        Self(Zeroizing::new(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SecretValue {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SecretValue {}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Entry ready for remote creation. `value` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedEntry {
    pub name: String,
    pub value: SecretValue,
}

/// Resource ready for remote creation, entries in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedResource {
    pub name: String,
    pub entries: Vec<ProvisionedEntry>,
}

impl ProvisionedResource {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self { name: name.into(), entries: Vec::with_capacity(capacity) }
    }
}
