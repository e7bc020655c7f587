pub mod entities;
pub mod error;
pub mod remote;
pub mod store;

pub use error::{Result, StoreError};
pub use remote::{Entity, RemoteCollection};
pub use store::EntityStore;
