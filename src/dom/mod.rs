//! Simulated visual tree — the host-environment collaborator.
//!
//! Provides just enough of a document model to exercise the scaler: element
//! creation and cloning, append/remove, inline style writes, and rendered
//! pixel-width reads backed by heuristic text metrics.

pub mod metrics;
pub mod selector;
pub mod tree;

pub use selector::{parse_selector, Selector};
pub use tree::{Document, Element, NodeId, DEFAULT_FONT_SIZE};
