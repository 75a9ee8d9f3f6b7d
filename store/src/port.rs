//! The persistence port: raw JSON document storage keyed by name, plus
//! typed load/save helpers that wrap every document in a schema-version
//! envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Schema version written into every persisted document.
pub const SCHEMA_VERSION: u32 = 1;

/// Keys of the five independently persisted documents. There is no
/// transactional guarantee across keys.
pub const PRODUCTS_KEY: &str = "products";
pub const CART_KEY: &str = "cart";
pub const ORDERS_KEY: &str = "orders";
pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum PortError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Whole-document storage. Implementations write synchronously; a
/// document is either fully replaced or left as it was.
pub trait StatePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;
    fn put(&self, key: &str, raw: &str) -> Result<(), PortError>;
    fn delete(&self, key: &str) -> Result<(), PortError>;
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Load a document, failing soft: an absent key, an unreadable backend,
/// malformed JSON, or an unexpected schema version all yield `None` and
/// the caller substitutes its default. A parse error never propagates.
pub fn load<T: DeserializeOwned>(port: &dyn StatePort, key: &str) -> Option<T> {
    let raw = match port.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, %err, "failed to read persisted state, starting fresh");
            return None;
        }
    };
    match serde_json::from_str::<Envelope<T>>(&raw) {
        Ok(envelope) if envelope.version == SCHEMA_VERSION => Some(envelope.data),
        Ok(envelope) => {
            warn!(
                key,
                version = envelope.version,
                "unexpected schema version, starting fresh"
            );
            None
        }
        Err(err) => {
            warn!(key, %err, "malformed persisted state, starting fresh");
            None
        }
    }
}

/// Serialize a document under the version envelope and write it.
pub fn save<T: Serialize>(port: &dyn StatePort, key: &str, value: &T) -> Result<(), PortError> {
    let raw = serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        data: value,
    })?;
    port.put(key, &raw)
}
