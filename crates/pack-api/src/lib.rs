//! Contracts between the compendium browser core and the host that owns the
//! packs.
//!
//! The host resolves pack identifiers, serves lightweight index records and
//! observes loading progress. Nothing in this crate performs I/O itself.

pub mod error;
pub mod pack;
pub mod progress;
pub mod provider;
pub mod record;

pub use error::ProviderError;
pub use pack::{DocumentKind, PackHandle};
pub use progress::{NullProgress, ProgressSink};
pub use provider::PackProvider;
pub use record::IndexRecord;
