//! Teamgate Server — HTTP surface for the account management service.
//!
//! Structure:
//! - `state.rs`: service wiring (repositories → services → router)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `extract.rs`: bearer-token authentication extractor
//! - `errors.rs`: consistent error responses

pub mod config;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod state;

pub use state::{AppState, build_app};
