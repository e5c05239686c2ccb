//! Teamgate Core — domain models, repository contracts, validation and
//! the authorization policy.

pub mod error;
pub mod models;
pub mod policy;
pub mod repository;
pub mod validate;

pub use error::{TeamgateError, TeamgateResult};
pub use policy::Caller;
