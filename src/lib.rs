pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod pattern_library;
pub mod renderers;
pub mod routes;
pub mod setup;
pub mod state;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
