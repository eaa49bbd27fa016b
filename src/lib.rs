pub mod arrivals;
pub mod config;
pub mod feed;
pub mod fetch;
pub mod parser;
pub mod server;
