#[cfg(feature = "cli")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use lnd_client::cli::{self, node_info};

    dotenvy::dotenv().ok();
    cli::init_logging();
    let args = node_info::Args::parse();

    node_info::run(args, &mut std::io::stdout()).await?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("This binary requires the 'cli' feature to be enabled.");
}
