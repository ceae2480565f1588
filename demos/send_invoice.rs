//! E-mail an existing invoice to its customer.
//!
//! Run with: `IFIRMA_USERNAME=... IFIRMA_INVOICES_KEY=... cargo run --example send_invoice -- <invoice-id>`

use ifirma::client::{Config, Ifirma, SendOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let invoice_id: u64 = std::env::args()
        .nth(1)
        .ok_or("usage: send_invoice <invoice-id>")?
        .parse()?;

    let config = Config {
        username: std::env::var("IFIRMA_USERNAME")?,
        invoices_key: std::env::var("IFIRMA_INVOICES_KEY")?,
    };
    let client = Ifirma::new(config)?;

    let options = SendOptions {
        text: "W zalaczeniu przesylamy fakture.".into(),
        ..SendOptions::default()
    };
    let response = client.send_invoice(invoice_id, &options).await?;

    if response.success() {
        println!("invoice {invoice_id} sent");
    } else {
        println!(
            "send failed: {} ({})",
            response.message().unwrap_or("no message"),
            response.code().unwrap_or(-1)
        );
    }
    Ok(())
}
