//! Typed extension points the host dispatches into.
//!
//! Each extension point is a trait; handlers are registered as trait objects
//! on a [`HookRegistry`] instead of against string hook names.

mod chain;
mod registry;

pub use chain::{FilterChain, SchemaFilter, DEFAULT_PRIORITY};
pub use registry::{HookRegistry, OrderDetailsRenderer, OrderFinalizedListener, SchemaHook};
