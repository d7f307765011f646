//! Configuration modules for the Markbook API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing secret and lifetime (fails closed if unset)

pub mod cors;
pub mod database;
pub mod jwt;
