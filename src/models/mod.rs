// Module exports for models

pub mod block;
pub mod heatmap;
pub mod poll;
pub mod recurrence;
pub mod settings;
pub mod slot;
