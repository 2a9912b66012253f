//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database repositories and password hashing.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repositories only
//! - `postgres` - PostgreSQL repositories via SeaORM

pub mod auth;
pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

pub use auth::Argon2PasswordService;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

pub use database::DatabaseConfig;
