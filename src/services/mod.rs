// Service module exports

pub mod month_grid;
pub mod picker;
pub mod settings;
