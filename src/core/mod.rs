//! Core business logic layer
//!
//! This module contains the fundamental data structures, traits, and operations
//! that form the heart of the application.

pub mod api;
pub mod data;
pub mod formula;
pub mod operations;
pub mod traits;
