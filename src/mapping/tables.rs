//! The iFirma mapping tables.
//!
//! Declarative data: which wire field each symbolic attribute lands in, and
//! which value encoding the service expects for it. Covers the domestic
//! invoice endpoint (`fakturakraj`) including the customer record and the
//! line-item list.

use super::field_map::FieldMap;
use super::transformer::{date_ymd, percent_as_fraction, strip_spaces};
use super::value_map::ValueMap;

/// The paired field and value tables for one endpoint family.
///
/// Built once at startup and passed into
/// [`AttributeMapper`](super::AttributeMapper) explicitly; tests can
/// substitute their own tables the same way.
#[derive(Debug, Clone)]
pub struct MappingConfig {
    pub fields: FieldMap,
    pub values: ValueMap,
}

impl MappingConfig {
    /// Tables for the domestic invoice (`fakturakraj`) endpoints.
    pub fn domestic_invoice() -> Self {
        Self {
            fields: invoice_fields(),
            values: invoice_values(),
        }
    }
}

fn invoice_fields() -> FieldMap {
    FieldMap::new()
        .leaf("paid", "Zaplacono")
        .leaf("type", "LiczOd")
        .leaf("account_no", "NumerKontaBankowego")
        .leaf("issue_date", "DataWystawienia")
        .leaf("sale_date", "DataSprzedazy")
        .leaf("sale_date_format", "FormatDatySprzedazy")
        .leaf("due_date", "TerminPlatnosci")
        .leaf("payment_type", "SposobZaplaty")
        .leaf("designation_type", "RodzajPodpisuOdbiorcy")
        .leaf("gios", "WidocznyNumerGios")
        .leaf("number", "Numer")
        .leaf("full_number", "PelnyNumer")
        .leaf("customer_id", "IdentyfikatorKontrahenta")
        .leaf("customer_nip", "NIPKontrahenta")
        .composite(
            "customer",
            "Kontrahent",
            FieldMap::new()
                .leaf("id", "Identyfikator")
                .leaf("name", "Nazwa")
                .leaf("nip", "NIP")
                .leaf("street", "Ulica")
                .leaf("country", "Kraj")
                .leaf("zipcode", "KodPocztowy")
                .leaf("city", "Miejscowosc")
                .leaf("email", "Email")
                .leaf("phone", "Telefon")
                .leaf("eu_prefix", "PrefiksUE")
                .leaf("natural_person", "OsobaFizyczna"),
        )
        .composite(
            "items",
            "Pozycje",
            FieldMap::new()
                .leaf("vat_rate", "StawkaVat")
                .leaf("quantity", "Ilosc")
                .leaf("price", "CenaJednostkowa")
                .leaf("name", "NazwaPelna")
                .leaf("unit", "Jednostka")
                .leaf("vat_type", "TypStawkiVat")
                .leaf("pkwiu", "PKWiU"),
        )
}

fn invoice_values() -> ValueMap {
    ValueMap::new()
        .transform("issue_date", date_ymd)
        .transform("sale_date", date_ymd)
        .transform("due_date", date_ymd)
        .transform("account_no", strip_spaces)
        .enumerated(
            "type",
            &[
                ("net", "NET"),   // amounts are net, VAT added on top
                ("gross", "BRT"), // amounts are gross, VAT included
            ],
        )
        .enumerated(
            "payment_type",
            &[
                ("wire", "PRZ"),
                ("cash", "GTK"),
                ("offset", "KOM"),
                ("on_delivery", "POB"),
            ],
        )
        .enumerated("sale_date_format", &[("daily", "DZN"), ("monthly", "MSC")])
        .nested(
            "items",
            ValueMap::new()
                .enumerated("vat_type", &[("percent", "PRC"), ("exempt", "ZW")])
                .transform("vat_rate", percent_as_fraction),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::FieldNode;

    #[test]
    fn every_scalar_key_has_a_leaf() {
        let fields = invoice_fields();
        for key in [
            "paid",
            "type",
            "account_no",
            "issue_date",
            "sale_date",
            "sale_date_format",
            "due_date",
            "payment_type",
            "designation_type",
            "gios",
            "number",
            "full_number",
            "customer_id",
            "customer_nip",
        ] {
            assert!(
                matches!(fields.get(key), Some(FieldNode::Leaf(_))),
                "expected leaf mapping for {key}"
            );
        }
    }

    #[test]
    fn composites_carry_their_wire_names() {
        let fields = invoice_fields();
        for (key, expected) in [("customer", "Kontrahent"), ("items", "Pozycje")] {
            match fields.get(key) {
                Some(FieldNode::Composite { wire_name, .. }) => assert_eq!(*wire_name, expected),
                other => panic!("expected composite for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn value_rules_cover_only_encoded_keys() {
        let values = invoice_values();
        assert!(values.get("issue_date").is_some());
        assert!(values.get("type").is_some());
        assert!(values.nested_rules("items").is_some());
        // Plain-text fields carry no rule and pass through.
        assert!(values.get("number").is_none());
        assert!(values.get("customer_nip").is_none());
    }
}
