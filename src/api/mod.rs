//! # API Module
//!
//! HTTP endpoints served by the temporary local server during
//! `trueshuffle auth`:
//!
//! - [`callback`] - receives the authorization code from Spotify and exchanges
//!   it, together with the PKCE verifier, for a token
//! - [`health`] - status and version
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use trueshuffle::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
