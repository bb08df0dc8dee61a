// Service module exports

pub mod form;
pub mod grid;
pub mod overlay;
pub mod paint;
pub mod recurrence;
pub mod settings;
pub mod suggestion;
