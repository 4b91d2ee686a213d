pub mod backend;
pub mod coingecko;
pub mod config;
pub mod error;
pub mod event;
pub mod exit_signal;
pub mod forecast;
pub mod indicator;
pub mod input;
pub mod model;
pub mod ticker;
pub mod ui;
