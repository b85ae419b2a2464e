mod client;
pub use client::*;

mod config;
pub use config::*;
