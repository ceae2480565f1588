//! # ifirma
//!
//! Client library for the [iFirma](https://www.ifirma.pl) invoicing API.
//!
//! The heart of the crate is a bidirectional attribute-mapping engine: callers
//! describe an invoice with symbolic attribute names and typed values, and the
//! engine translates that tree into the flat, Polish-named wire format the
//! service expects, applying per-field value transformations (date formatting,
//! enumerated codes, numeric rescaling) along the way.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ifirma::mapping::*;
//!
//! let attrs = AttrTree::new()
//!     .set("issue_date", NaiveDate::from_ymd_opt(2023, 1, 5).unwrap())
//!     .set("type", AttrValue::sym("net"))
//!     .set("items", vec![
//!         AttrTree::new()
//!             .set("name", "Widget")
//!             .set("quantity", 1)
//!             .set("vat_rate", 23),
//!     ]);
//!
//! let config = MappingConfig::domestic_invoice();
//! let wire = AttributeMapper::new(&config.fields, &config.values)
//!     .map(&attrs)
//!     .unwrap();
//!
//! assert_eq!(wire["DataWystawienia"], "2023-01-05");
//! assert_eq!(wire["LiczOd"], "NET");
//! assert_eq!(wire["Pozycje"][0]["StawkaVat"], "0.23");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `client` (default) | HTTP client, request signing, invoice commands |
//!
//! With `default-features = false` the crate still provides the mapping
//! engine and the [`response::Response`] wrapper, with no network stack.

pub mod mapping;

pub mod response;

#[cfg(feature = "client")]
pub mod client;

// Re-export the mapping core at crate root for convenience
pub use crate::mapping::*;
