use std::collections::HashMap;

use serde_json::Value;

/// Ephemeral key-value store seam, the localStorage of this demo.
pub trait KeyValueStore: Send {
    fn store(&mut self, key: &str, value: Value);

    fn get(&self, key: &str) -> Option<Value>;
}

/// In-memory store; contents live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn store(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}
