use std::sync::Arc;

use crate::{
    Api,
    credentials::{self, CredentialPaths},
    lnd, mock,
};

/// Internal configuration enum representing the chosen backend and its settings.
pub enum Config {
    Mock,
    Lnd(lnd::Config),
}

impl Config {
    /// Resolve credential paths and read both files. Nothing touches the
    /// network here.
    pub fn from_args(args: super::Args) -> crate::Result<Self> {
        if args.mock {
            return Ok(Config::Mock);
        }

        let base_dir = args
            .config_dir
            .unwrap_or_else(credentials::default_config_dir);
        let paths = CredentialPaths::resolve(base_dir, args.cert_path, args.macaroon_path);
        log::debug!(
            "credentials: cert = {}, macaroon = {}",
            paths.cert.display(),
            paths.macaroon.display()
        );

        Ok(Config::Lnd(lnd::Config::load(&args.rest_api, &paths)?))
    }

    /// Consumes the config and initializes the appropriate API client.
    pub fn build(self) -> crate::Result<Arc<dyn Api>> {
        match self {
            Config::Lnd(config) => {
                let client = lnd::Client::try_from(config)?;
                Ok(Arc::new(client))
            }
            Config::Mock => {
                let client = mock::Client::new();
                Ok(Arc::new(client))
            }
        }
    }
}
