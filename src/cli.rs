mod args;
pub use args::ClientArgs as Args;

mod config;
pub use config::Config;

pub mod interactive;
pub mod json;
pub mod node_info;

/// Diagnostics go to stderr so that stdout stays clean for the programs'
/// own output. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
}
