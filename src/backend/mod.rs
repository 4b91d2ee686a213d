pub mod client;
pub mod server;
pub mod types;

pub use client::BackendClient;
pub use server::{router, ServerState};
pub use types::{BackendForecast, ForecastResponse};
