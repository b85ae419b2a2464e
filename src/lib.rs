mod api;
pub use api::*;
pub mod types;
pub use types::*;
mod error;
pub use error::*;

pub mod credentials;
pub mod macaroon;
pub mod tls_certificate;

// Clients
pub mod lnd;
pub mod mock;

#[cfg(feature = "qr")]
pub mod qr;

#[cfg(feature = "cli")]
pub mod cli;
