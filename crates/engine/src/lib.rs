//! Sandbox Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Scene-building operations on top of injected ports
//! - `infrastructure/` - Port traits, random sources and configuration
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
