// Fri Feb 06 2026 - Alex

pub mod unordered;

pub use unordered::{LayoutError, UnorderedLayout};
