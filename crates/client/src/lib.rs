pub mod client;
pub mod collections;
pub mod error;
pub mod verification;

pub use client::{ApiClient, ClientConfig};
pub use collections::Collection;
pub use error::{ApiError, Result};
pub use verification::VerifiedEmail;
