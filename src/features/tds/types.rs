use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TdsSetting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Section key, e.g. "194C" or "194J".
    pub tds_type: String,
    pub percentage: f64,
    pub max_cap_price: f64,
    pub description: String,
    pub status: bool,
}

impl TdsSetting {
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
    use super::TdsSetting;

    #[test]
    fn deserializes_the_wire_shape() {
        let setting: TdsSetting = serde_json::from_str(
            r#"{"_id":"a1","tdsType":"194J","percentage":10,"maxCapPrice":30000,"description":"Professional fees","status":true}"#,
        )
        .expect("valid tds setting");
        assert_eq!(setting.tds_type, "194J");
        assert_eq!(setting.percentage, 10.0);
    }
}
