//! # Storage Module
//!
//! Handles data persistence for the birthday tracker.
//!
//! Services only see the [`BirthdayStorage`] trait; the SQLite implementation
//! lives in `repositories` and is wired up at startup.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database through SQLx
//! - **Tests**: a private in-memory database per test

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::BirthdayRepository;
pub use traits::BirthdayStorage;
