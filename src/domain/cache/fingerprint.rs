use std::collections::BTreeMap;

/// Deterministic one-way hash over named request fields.
///
/// Fields are kept sorted by name, so the order in which they are added does
/// not affect the result. Values are length-prefixed before hashing.
#[derive(Debug, Clone, Default)]
pub struct Fingerprint {
    fields: BTreeMap<&'static str, String>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.insert(name, value.to_string());
        self
    }

    /// Hex-encoded blake3 digest
    pub fn finish(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (name, value) in &self.fields {
            hasher.update(name.as_bytes());
            hasher.update(b"=");
            hasher.update(&(value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
            hasher.update(b"|");
        }
        hasher.finalize().to_hex().to_string()
    }
}
