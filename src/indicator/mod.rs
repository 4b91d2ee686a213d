pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::Ema;
pub use macd::{macd_series, Macd, MacdPoint};
pub use rsi::Rsi;
pub use sma::Sma;
