pub mod activity;
pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;
