use std::path::Path;

use crate::{Error, credentials::read_file};

/// PEM encoded certificate of the node, e.g. LND's `tls.cert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsCertificate(Vec<u8>);

impl TlsCertificate {
    pub fn read(path: impl AsRef<Path>) -> crate::Result<Self> {
        read_file(path.as_ref()).map(TlsCertificate)
    }

    /// Parse as a root certificate for the HTTP client.
    pub fn to_reqwest(&self) -> crate::Result<reqwest::Certificate> {
        reqwest::Certificate::from_pem(&self.0)
            .map_err(|e| Error::Init(format!("Failed to parse PEM: {}", e)))
    }
}

impl From<Vec<u8>> for TlsCertificate {
    fn from(bytes: Vec<u8>) -> Self {
        TlsCertificate(bytes)
    }
}

impl AsRef<[u8]> for TlsCertificate {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
