//! `create-invoice`: asks for whatever is missing, then creates one invoice
//! and prints a human readable summary.
//!
//! Failures are reported on stdout and never change the exit status.

use std::io::{self, BufRead, Write};

use crate::{AddInvoiceRequest, Api};

pub const HINT: &str =
    "Make sure your LND node is running and the certificate and macaroon paths are correct.";

#[derive(Debug, clap::Parser)]
#[command(name = "create-invoice", about = "Create a Lightning invoice")]
pub struct Args {
    #[command(flatten)]
    pub client: super::Args,

    /// Amount in satoshis
    #[arg(long)]
    pub amount: Option<i64>,

    /// Invoice memo/description
    #[arg(long)]
    pub memo: Option<String>,
}

pub async fn run(args: Args, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let Some(request) = complete_request(args.amount, args.memo, input, out)? else {
        return Ok(());
    };

    if let Err(err) = connect_and_create(args.client, request, out).await {
        writeln!(out, "\nError: {}", err)?;
        writeln!(out, "{}", HINT)?;
    }
    Ok(())
}

/// Prompt for the amount and memo when they were not given as flags.
/// `None` means the user gave no usable amount; the reason has been printed.
pub fn complete_request(
    amount: Option<i64>,
    memo: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<AddInvoiceRequest>> {
    let amount = match amount {
        Some(amount) => amount,
        None => {
            let answer = prompt("Enter amount (sats): ", input, out)?;
            if answer.is_empty() {
                writeln!(out, "Amount is required.")?;
                return Ok(None);
            }
            match answer.trim().parse::<i64>() {
                Ok(amount) => amount,
                Err(_) => {
                    writeln!(out, "Invalid amount.")?;
                    return Ok(None);
                }
            }
        }
    };

    let memo = match memo {
        Some(memo) => memo,
        None => prompt("Enter memo (optional): ", input, out)?,
    };

    Ok(Some(AddInvoiceRequest::new(amount, memo)))
}

async fn connect_and_create(
    client: super::Args,
    request: AddInvoiceRequest,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let api = super::Config::from_args(client)?.build()?;
    create_and_report(api.as_ref(), request, out).await
}

/// Check the connection, create the invoice and print the summary.
pub async fn create_and_report(
    api: &dyn Api,
    request: AddInvoiceRequest,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let info = api.get_info().await?;
    writeln!(out, "Connected to LND node: {}", info.alias)?;

    writeln!(out, "Creating invoice for {} sats...", request.value)?;
    let invoice = api.add_invoice(request).await?;

    writeln!(out, "\n=== INVOICE CREATED ===")?;
    writeln!(out, "Payment Request: {}", invoice.payment_request)?;
    writeln!(out, "R Hash (hex):    {}", invoice.r_hash_hex())?;
    match invoice.add_index {
        Some(index) => writeln!(out, "Add Index:       {}", index)?,
        None => writeln!(out, "Add Index:       N/A")?,
    }
    writeln!(out, "=======================")?;
    Ok(())
}

/// Print `message`, read one line, strip the line ending.
fn prompt(message: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
