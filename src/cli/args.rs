use std::path::PathBuf;

use crate::{credentials, lnd};

/// How to reach the node. Shared by every program.
#[derive(Debug, Clone, clap::Args)]
pub struct ClientArgs {
    /// Directory holding `tls.cert` and `admin.macaroon`.
    /// Defaults to `../config` relative to the executable.
    #[arg(long, env = credentials::ENV_CONFIG_DIR, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Path to the node's TLS certificate (PEM).
    #[arg(long, env = credentials::ENV_CERT_PATH, global = true)]
    pub cert_path: Option<PathBuf>,

    /// Path to the macaroon file.
    #[arg(long, env = credentials::ENV_MACAROON_PATH, global = true)]
    pub macaroon_path: Option<PathBuf>,

    /// The base URL of the LND REST API.
    #[arg(
        long,
        env = lnd::ENV_REST_API,
        default_value = lnd::DEFAULT_REST_API,
        global = true
    )]
    pub rest_api: String,

    /// When set, run commands against an in-memory mock node.
    #[arg(long, env = "LND_MOCK", default_value_t = false, global = true)]
    pub mock: bool,
}
