//! # postdeck-app - View-models and configuration
//!
//! The non-presentational logic layer: view-models own the fetched data and
//! the derived (filtered/paginated) state, and apply optimistic mutations
//! reconciled against server responses. Any presentation layer -- the CLI
//! driver in this workspace, or a GUI -- renders from these types and calls
//! their operations.

pub mod auth;
pub mod collection;
pub mod config;
pub mod detail;
pub mod share;

#[cfg(test)]
mod test_support;

// Re-export primary types
pub use auth::AuthFlow;
pub use collection::{LoadPhase, PostCollectionViewModel, ViewOutcome, DEFAULT_PAGE_SIZE};
pub use config::Settings;
pub use detail::{DetailPhase, LoadGeneration, PostDetailViewModel};
pub use share::{share_links, ShareLinks};
