// Thu Feb 05 2026 - Alex

pub mod builder;
pub mod expansion;
pub mod format;
pub mod node;

pub use builder::TreeBuilder;
pub use expansion::ExpandSet;
pub use format::FormatHints;
pub use node::{DisplayNode, Sentinel};
