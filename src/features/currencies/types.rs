//! Currency payloads as the API serves them (camelCase, Mongo-style `_id`).

use serde::{Deserialize, Serialize};

/// Payment method options offered by the currency editor.
pub const PAYMENT_METHOD_OPTIONS: &[&str] = &["Credit Card, NetBanking", "UPI"];

/// Which currency book a screen works against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrencyScope {
    Domestic,
    International,
}

impl CurrencyScope {
    pub fn as_query(self) -> &'static str {
        match self {
            CurrencyScope::Domestic => "domestic",
            CurrencyScope::International => "international",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CurrencyScope::Domestic => "Currency",
            CurrencyScope::International => "Currency - Intl",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub country: String,
    pub currency_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub currency_type: String,
    pub payment_methods: Vec<String>,
    pub voucher_value: Vec<f64>,
    pub icon: String,
    pub status: bool,
    pub exchange_rate: f64,
    pub currency_price_surge_debit: f64,
    pub min_recharge_allowed_amount: f64,
}

impl Currency {
    /// Blank editor values for the add form.
    pub fn reference(scope: CurrencyScope) -> Self {
        Self {
            currency_type: scope.as_query().to_string(),
            status: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Currency, CurrencyScope};

    #[test]
    fn deserializes_the_wire_shape() {
        let currency: Currency = serde_json::from_str(
            r#"{
                "_id": "66f0",
                "country": "India",
                "currencyName": "Indian Rupee",
                "currencyCode": "INR",
                "currencySymbol": "₹",
                "currencyType": "domestic",
                "paymentMethods": ["UPI"],
                "voucherValue": [100, 500],
                "icon": "https://cdn.harivara.app/inr.svg",
                "status": true,
                "exchangeRate": 1.0,
                "currencyPriceSurgeDebit": 0,
                "minRechargeAllowedAmount": 10
            }"#,
        )
        .expect("valid currency");
        assert_eq!(currency.id.as_deref(), Some("66f0"));
        assert_eq!(currency.currency_code, "INR");
        assert_eq!(currency.voucher_value, vec![100.0, 500.0]);
    }

    #[test]
    fn reference_values_carry_the_scope() {
        let reference = Currency::reference(CurrencyScope::International);
        assert_eq!(reference.currency_type, "international");
        assert!(reference.status);
        assert!(reference.id.is_none());
    }

    #[test]
    fn new_records_serialize_without_an_id() {
        let json = serde_json::to_string(&Currency::reference(CurrencyScope::Domestic))
            .expect("serializes");
        assert!(!json.contains("_id"));
        assert!(json.contains("currencyType"));
    }
}
