//! Middleware for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::require_school`] route layer rejects requests without a
//!    valid school token before any handler runs
//! 3. Handlers take the [`auth::AuthSchool`] extractor to receive the
//!    verified claims

pub mod auth;
