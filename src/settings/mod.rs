//! Configuration loading and resolution.
//!
//! `load` layers config files, `COMPENDIUM__*` environment variables and CLI
//! overrides into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
