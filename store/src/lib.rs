//! Local-first storefront state engine.
//!
//! Four independently persisted state containers (catalog, cart, order
//! history, auth session), each mutated through typed operations that
//! mirror the new state to a pluggable persistence port, and each
//! exposing derived views recomputed on every read. The [`Storefront`]
//! aggregate owns all four and the single cross-container coupling:
//! placing an order clears the cart.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod credentials;
pub mod error;
pub mod file;
pub mod memory;
pub mod orders;
pub mod port;
pub mod storefront;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use port::{PortError, StatePort};
pub use storefront::{CheckoutRequest, Storefront};
