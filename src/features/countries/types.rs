use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub iso2: String,
    pub iso3: String,
    pub numeric_code: String,
    pub phone_code: String,
    pub region: String,
    pub currency_name: String,
    pub currency_symbol: String,
    pub assigned_currency: String,
    pub emoji: String,
    pub non_member_debit_percentage: f64,
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Country {
    /// Blank editor values for the add form.
    pub fn reference() -> Self {
        Self {
            status: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Country;

    #[test]
    fn deserializes_the_wire_shape() {
        let country: Country = serde_json::from_str(
            r#"{
                "_id": "62ab",
                "name": "India",
                "iso2": "IN",
                "iso3": "IND",
                "numericCode": "356",
                "phoneCode": "+91",
                "region": "Asia",
                "currencyName": "Indian Rupee",
                "currencySymbol": "₹",
                "assignedCurrency": "INR",
                "emoji": "🇮🇳",
                "nonMemberDebitPercentage": 2.5,
                "status": true
            }"#,
        )
        .expect("valid country");
        assert_eq!(country.iso3, "IND");
        assert_eq!(country.non_member_debit_percentage, 2.5);
        assert!(country.icon_url.is_none());
    }
}
