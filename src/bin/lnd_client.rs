#[cfg(feature = "cli")]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    use clap::Parser;
    use lnd_client::cli::{self, json};

    dotenvy::dotenv().ok();
    cli::init_logging();
    let args = match json::Cli::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            println!("{}", json::error_envelope(&json::usage_error(&err)));
            std::process::exit(1);
        }
    };

    match json::run(args).await {
        Ok(value) => println!("{}", value),
        Err(err) => {
            log::debug!("{:?}", err);
            println!("{}", json::error_envelope(&err));
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("This binary requires the 'cli' feature to be enabled.");
}
