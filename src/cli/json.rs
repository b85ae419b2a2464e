//! `lnd-client`: one subcommand in, one JSON object out.

use serde::Serialize;
use serde_json::{Value, json};

use crate::{AddInvoiceRequest, AddInvoiceResponse, Api, Error};

#[derive(Debug, clap::Parser)]
#[command(name = "lnd-client", about = "LND client interface")]
pub struct Cli {
    #[command(flatten)]
    pub client: super::Args,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Cmd {
    /// Print the node's info.
    Info,
    /// Create an invoice, with a QR code of its payment request.
    Invoice {
        /// Amount in satoshis. Required.
        #[arg(long)]
        amount: Option<i64>,

        /// Memo for the invoice.
        #[arg(long, default_value = "Donation")]
        memo: String,

        /// Leave out `qr_code_base64`.
        #[arg(long)]
        no_qr: bool,
    },
}

/// The node's invoice plus the rendered QR code.
#[derive(Debug, Serialize)]
pub struct InvoiceOutput {
    #[serde(flatten)]
    pub invoice: AddInvoiceResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_base64: Option<String>,
}

impl Cmd {
    /// Catch bad input before credentials are read or the node is contacted.
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Cmd::Invoice { amount: None, .. } => Err(missing_amount()),
            _ => Ok(()),
        }
    }

    pub async fn execute(self, api: &dyn Api) -> crate::Result<Value> {
        match self {
            Cmd::Info => to_value(&api.get_info().await?),
            Cmd::Invoice { amount: None, .. } => Err(missing_amount()),
            Cmd::Invoice {
                amount: Some(amount),
                memo,
                no_qr,
            } => {
                let invoice = api.add_invoice(AddInvoiceRequest::new(amount, memo)).await?;
                if invoice.payment_request.is_empty() {
                    return Err(Error::InvalidData(
                        "Failed to get payment request from LND response".to_string(),
                    ));
                }
                let qr_code_base64 = if no_qr {
                    None
                } else {
                    qr_code(&invoice.payment_request)?
                };
                to_value(&InvoiceOutput {
                    invoice,
                    qr_code_base64,
                })
            }
        }
    }
}

/// Validate, load credentials, then run the command.
pub async fn run(cli: Cli) -> crate::Result<Value> {
    cli.command.validate()?;
    let api = super::Config::from_args(cli.client)?.build()?;
    cli.command.execute(api.as_ref()).await
}

/// What gets printed when anything fails.
pub fn error_envelope(err: &Error) -> Value {
    json!({
        "error": err.to_string(),
        "kind": err.kind(),
    })
}

/// A rejected command line, reported through the same envelope as any other
/// failure. Help and version requests are not errors and never get here.
pub fn usage_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    Error::Validation(first_line.trim_start_matches("error: ").to_string())
}

fn missing_amount() -> Error {
    Error::Validation("Amount is required for invoice".to_string())
}

#[cfg(feature = "qr")]
fn qr_code(payment_request: &str) -> crate::Result<Option<String>> {
    crate::qr::to_base64_png(payment_request).map(Some)
}

#[cfg(not(feature = "qr"))]
fn qr_code(_payment_request: &str) -> crate::Result<Option<String>> {
    Ok(None)
}

fn to_value<T: Serialize>(value: &T) -> crate::Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Parse(e.to_string()))
}
