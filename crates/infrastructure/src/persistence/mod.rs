//! Persistence module
//!
//! Read-only SQLite access: pool construction, startup schema
//! discovery, and the fixed observation queries.

pub mod connection;
pub mod observation_store;
pub mod schema;

pub use connection::{PersistenceError, open_read_only};
pub use observation_store::ObservationStore;
pub use schema::ObservationSchema;
