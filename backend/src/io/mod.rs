//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic. Currently a
//! single REST adapter built on axum.

pub mod rest;
