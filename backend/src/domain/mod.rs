//! # Domain Module
//!
//! Business logic for the birthday tracker, independent of HTTP and of the
//! storage backend.
//!
//! ## Module Organization
//!
//! - **schedule**: next-occurrence math, days-until, bucket classification and grouping
//! - **birthday_service**: CRUD, validation, search, grouped and upcoming views
//! - **import_service**: per-row bulk import with success/failure accounting
//! - **reminder_service**: who celebrates today and tomorrow, sent status
//! - **export_service**: CSV export
//!
//! ## Business Rules
//!
//! - Names are required, trimmed, at most 100 characters
//! - Birth dates must be real calendar dates between 1900 and 2100
//! - Email and message are optional; blank means absent
//! - The reference date for every calculation is passed in by the caller
//! - Feb 29 birthdays are observed on Mar 1 in common years

pub mod birthday_service;
pub mod commands;
pub mod export_service;
pub mod import_service;
pub mod models;
pub mod reminder_service;
pub mod schedule;

pub use birthday_service::BirthdayService;
pub use export_service::ExportService;
pub use import_service::ImportService;
pub use reminder_service::ReminderService;
