//! Session Record and Stores
//!
//! - **types**: `Role`, `SessionRecord`, `SessionState` and the storage keys
//! - **store**: `SessionStore` / `KeyValueStore` traits and the memory and
//!   file backends
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use biopharm::session::{MemoryStore, Role, SessionRecord, SessionStore};
//!
//! let mut store = MemoryStore::new();
//! store.set(&SessionRecord::new("staff", "alice")).unwrap();
//!
//! let record = store.get().unwrap().unwrap();
//! assert_eq!(record.role, Role::Staff);
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{SessionError, SessionResult};
pub use store::{FileStore, KeyValueStore, MemoryStore, SessionStore};
pub use types::{
    Role, SessionRecord, SessionState, DEFAULT_DISPLAY_USERNAME, ROLE_KEY, USERNAME_KEY,
};
