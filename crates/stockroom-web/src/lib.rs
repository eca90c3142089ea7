//! Stockroom Web - HTTP presentation layer
//!
//! Thin axum service over the `stockroom-core` store: JSON item CRUD with
//! post/redirect/get on mutations, the static form reference data, and the
//! demo seed. All storage semantics live in the core crate; this crate only
//! binds requests, translates errors to HTTP, and constructs redirects.

pub mod catalog;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
