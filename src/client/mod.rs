//! Service client
//!
//! [`Transport`] is the single operation the rest of the crate needs from the
//! network. [`EventRegistry`] implements it over HTTP; tests substitute their
//! own implementations.

mod lookup;
mod registry;
mod transport;

pub use lookup::{get_uri, suggest, SuggestKind, Suggestion};
pub use registry::EventRegistry;
pub use transport::Transport;
