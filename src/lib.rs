//! Synapse Growth
//!
//! A local-first learning app for analytics and growth-strategy
//! practice. Every interactive feature follows the same loop: load a
//! state slice from the key-value store, mutate it on a user event,
//! persist the whole slice, and render a fresh view fragment. The
//! binary wraps this in a static file server for the app shell.

pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod picker;
pub mod scoring;
pub mod server;
pub mod store;
pub mod view;
pub mod widgets;

pub use catalog::Catalog;
pub use config::Config;
pub use error::AppError;
pub use server::StaticServer;
pub use store::StateStore;
pub use view::ViewFragment;
