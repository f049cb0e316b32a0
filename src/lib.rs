// Calendar Picker Library
// Month grid generation and navigation for date picker views

pub mod models;
pub mod services;
pub mod utils;
