//! CLI library components for the item-catalog merge tool.

pub mod defaults;
pub mod logging;
pub mod pipeline;
pub mod types;
