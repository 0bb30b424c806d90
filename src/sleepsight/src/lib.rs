#[macro_use]
extern crate log;

pub mod charts;

mod loader;
pub use loader::load_sleep_data;
