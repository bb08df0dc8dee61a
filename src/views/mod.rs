// Presentation of composed grids

pub mod grid_view;

pub use grid_view::{render_grid, GridViewOptions};
