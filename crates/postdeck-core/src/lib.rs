//! # postdeck-core - Core Domain Types
//!
//! Foundation crate for postdeck. Provides domain types, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Post`] - A blog post with view/like counters and an optional image
//! - [`Category`] - A category entry from the category endpoint
//! - [`Comment`] - A single comment scoped to one post
//! - [`AuthSession`] - Username plus opaque token for a signed-in user
//! - [`FilterState`] - Free-text query, selected category, and current page
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use postdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{
    AuthSession, Category, Comment, FilterState, Post, PostId, ALL_CATEGORIES,
};
