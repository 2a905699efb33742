//! Session management: who is logged in, and how that survives restarts.

mod auth;
mod context;
mod credentials;
mod persist;
mod storage;

pub use auth::{build_auth_header, AuthHeader};
pub use context::{Session, SessionContext};
pub use credentials::SecureString;
pub use persist::{forget_session, load_session, save_session, ACCESS_TOKEN_KEY, USER_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
