//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// File system operations and path handling
pub mod file;

/// Logger initialisation and log level mapping
pub mod logging;

/// Identifier case conversion
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
