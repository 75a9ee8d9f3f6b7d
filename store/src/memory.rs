use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::port::{PortError, StatePort};

/// In-memory port for tests and ephemeral runs. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, String>>,
}

impl StatePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let docs = self.docs.lock().expect("port mutex poisoned");
        Ok(docs.get(key).cloned())
    }

    fn put(&self, key: &str, raw: &str) -> Result<(), PortError> {
        let mut docs = self.docs.lock().expect("port mutex poisoned");
        docs.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PortError> {
        let mut docs = self.docs.lock().expect("port mutex poisoned");
        docs.remove(key);
        Ok(())
    }
}
