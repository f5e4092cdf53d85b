//! Core domain logic for bylines
//!
//! This module contains pure business logic with no I/O dependencies.
//! Persistence is abstracted through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Author, Post, Category, RecordSet)
//! - `validation/` - Field rules for authors and posts
//! - `services/` - The record store that enforces the rules on write
//! - `ports/` - Trait definitions for storage backends

pub mod models;
pub mod ports;
pub mod services;
pub mod validation;
