use crate::{credentials::CredentialPaths, macaroon::Macaroon, tls_certificate::TlsCertificate};

pub const ENV_REST_API: &str = "LND_REST_API";

/// LND's REST listener on the bootcamp setup.
pub const DEFAULT_REST_API: &str = "https://127.0.0.1:8083";

/// Everything a [`super::Client`] needs. Built once; the client never goes
/// back to disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub macaroon: Macaroon,
    pub tls_certificate: TlsCertificate,
}

impl Config {
    pub fn new(base_url: &str, macaroon: Macaroon, tls_certificate: TlsCertificate) -> Self {
        Self {
            base_url: base_url.trim_end_matches("/").to_string(),
            macaroon,
            tls_certificate,
        }
    }

    /// Read both credential files. Either one missing is an error, and no
    /// connection has been attempted at that point.
    pub fn load(base_url: &str, paths: &CredentialPaths) -> crate::Result<Self> {
        let tls_certificate = paths.load_tls_certificate()?;
        let macaroon = paths.load_macaroon()?;
        Ok(Self::new(base_url, macaroon, tls_certificate))
    }
}
