#[cfg(feature = "cli")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use lnd_client::cli::{self, interactive};

    dotenvy::dotenv().ok();
    cli::init_logging();
    let args = interactive::Args::parse();

    // Errors from the node are printed by `run`; only a broken stdin/stdout ends up here.
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    interactive::run(args, &mut stdin, &mut stdout).await?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("This binary requires the 'cli' feature to be enabled.");
}
