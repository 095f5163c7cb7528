// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod sink;

pub use http::HttpPageSource;
pub use sink::{CollectingSink, TracingSink};
