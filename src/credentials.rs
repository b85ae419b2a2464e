//! Where the node's credentials live on disk.
//!
//! Paths come from overrides when given (`LND_CERT_PATH`, `LND_MACAROON_PATH`
//! or the matching flags), otherwise from fixed file names inside a base
//! directory. Files are only touched by [`Macaroon::read`] and
//! [`TlsCertificate::read`], which fail with [`Error::Credentials`].

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{Error, macaroon::Macaroon, tls_certificate::TlsCertificate};

pub const ENV_CERT_PATH: &str = "LND_CERT_PATH";
pub const ENV_MACAROON_PATH: &str = "LND_MACAROON_PATH";
pub const ENV_CONFIG_DIR: &str = "LND_CONFIG_DIR";

pub const DEFAULT_CERT_FILE: &str = "tls.cert";
pub const DEFAULT_MACAROON_FILE: &str = "admin.macaroon";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPaths {
    pub cert: PathBuf,
    pub macaroon: PathBuf,
}

impl CredentialPaths {
    /// Overrides win; otherwise `<base_dir>/tls.cert` and `<base_dir>/admin.macaroon`.
    pub fn resolve(
        base_dir: impl AsRef<Path>,
        cert: Option<PathBuf>,
        macaroon: Option<PathBuf>,
    ) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            cert: cert.unwrap_or_else(|| base_dir.join(DEFAULT_CERT_FILE)),
            macaroon: macaroon.unwrap_or_else(|| base_dir.join(DEFAULT_MACAROON_FILE)),
        }
    }

    pub fn load_macaroon(&self) -> crate::Result<Macaroon> {
        Macaroon::read(&self.macaroon)
    }

    pub fn load_tls_certificate(&self) -> crate::Result<TlsCertificate> {
        TlsCertificate::read(&self.cert)
    }
}

/// `../config` next to the running executable, falling back to `./config`.
pub fn default_config_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("..").join("config")))
        .unwrap_or_else(|| PathBuf::from("config"))
}

pub(crate) fn read_file(path: &Path) -> crate::Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Credentials {
        path: path.to_path_buf(),
        source,
    })
}
