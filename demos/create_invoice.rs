//! Create a domestic invoice.
//!
//! Run with: `IFIRMA_USERNAME=... IFIRMA_INVOICES_KEY=... cargo run --example create_invoice`

use chrono::NaiveDate;
use ifirma::client::{Config, Ifirma};
use ifirma::mapping::{AttrTree, AttrValue};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        username: std::env::var("IFIRMA_USERNAME")?,
        invoices_key: std::env::var("IFIRMA_INVOICES_KEY")?,
    };
    let client = Ifirma::new(config)?;

    let issue_date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
    let attrs = AttrTree::new()
        .set("type", AttrValue::sym("net"))
        .set("issue_date", issue_date)
        .set("sale_date", issue_date)
        .set("sale_date_format", AttrValue::sym("daily"))
        .set("due_date", NaiveDate::from_ymd_opt(2023, 1, 19).unwrap())
        .set("payment_type", AttrValue::sym("wire"))
        .set("account_no", "07 1140 2004 0000 3102 4384")
        .set(
            "customer",
            AttrTree::new()
                .set("name", "Acme Sp. z o.o.")
                .set("nip", "1234567890")
                .set("street", "Polna 1")
                .set("zipcode", "60-535")
                .set("city", "Poznan")
                .set("email", "faktury@acme.pl"),
        )
        .set(
            "items",
            vec![
                AttrTree::new()
                    .set("name", "Consulting")
                    .set("quantity", 10)
                    .set("price", dec!(150))
                    .set("unit", "godz.")
                    .set("vat_type", AttrValue::sym("percent"))
                    .set("vat_rate", 23),
            ],
        );

    let response = client.create_invoice(&attrs).await?;
    if response.success() {
        println!(
            "created invoice {} (id {})",
            response.full_number().unwrap_or("?"),
            response.invoice_id().unwrap_or(0)
        );
    } else {
        println!(
            "service refused: {} ({})",
            response.message().unwrap_or("no message"),
            response.code().unwrap_or(-1)
        );
    }
    Ok(())
}
