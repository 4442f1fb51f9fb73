//! Row/column transformer and display surface.

pub mod columns;
pub mod derive;
pub mod format;
pub mod job_columns;
pub mod run_columns;
pub mod style;
pub mod surface;

pub use columns::{Column, GridRow, ValueSource};
pub use job_columns::{job_columns, job_sort_model};
pub use run_columns::{run_columns, run_sort_model};
pub use surface::{GridSurface, display_options, render_rows};
