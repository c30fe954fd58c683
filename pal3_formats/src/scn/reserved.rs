use serde::Serialize;

/// Run of little-endian words whose meaning is unknown, kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReservedWords(Box<[u32]>);

impl ReservedWords {
    pub fn new(words: Vec<u32>) -> Self {
        Self(words.into_boxed_slice())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    /// On-disk representation of the run.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|word| word.to_le_bytes()).collect()
    }
}

/// Run of raw bytes whose meaning is unknown, kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReservedBytes(Box<[u8]>);

impl ReservedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }
}
