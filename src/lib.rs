pub mod calendar;
pub mod config;
pub mod filters;
pub mod input;
pub mod loader;
pub mod output;
pub mod records;
pub mod session;
pub mod stats;
