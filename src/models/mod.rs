// Module exports for models

pub mod day_cell;
pub mod month_grid;
pub mod settings;
