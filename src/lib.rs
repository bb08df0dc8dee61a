// Squad Scheduler Library
// Weekly availability grid, overlay composition, recurrence and suggestions

pub mod models;
pub mod scenario;
pub mod services;
pub mod utils;
pub mod views;
