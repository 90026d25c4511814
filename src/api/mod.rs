//! Backend HTTP contract: wire models, errors and the reqwest client.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ChromaTuneClient, VibeBackend};
pub use error::ApiError;
pub use models::*;
