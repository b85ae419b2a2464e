//! `node-info`: quick connectivity check.

use std::io::{self, Write};

use crate::Api;

#[derive(Debug, clap::Parser)]
#[command(name = "node-info", about = "Check the connection to an LND node")]
pub struct Args {
    #[command(flatten)]
    pub client: super::Args,
}

pub async fn run(args: Args, out: &mut impl Write) -> io::Result<()> {
    let api = match super::Config::from_args(args.client).and_then(|config| config.build()) {
        Ok(api) => api,
        Err(err) => return writeln!(out, "Error: {}", err),
    };
    report(api.as_ref(), out).await
}

pub async fn report(api: &dyn Api, out: &mut impl Write) -> io::Result<()> {
    match api.get_info().await {
        Ok(info) => {
            writeln!(out, "Connected to {}", info.alias)?;
            writeln!(out, "Version: {}", info.version)
        }
        Err(err) => writeln!(out, "Error: {}", err),
    }
}
