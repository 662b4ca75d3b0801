use serde::{Deserialize, Serialize};

/// Preset GST categories offered by the editor's name picker.
pub const GST_NAME_OPTIONS: &[(&str, &str, f64)] = &[
    ("ASTROLOGY", "Astrology", 18.0),
    ("POOJA", "Pooja", 12.0),
];

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GstSetting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub gst_name: String,
    pub display_name: String,
    pub percentage: f64,
}

impl GstSetting {
    /// Blank editor values for the add form.
    pub fn reference() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{GST_NAME_OPTIONS, GstSetting};

    #[test]
    fn deserializes_the_wire_shape() {
        let setting: GstSetting = serde_json::from_str(
            r#"{"_id":"g1","gstName":"POOJA","displayName":"Pooja","percentage":12}"#,
        )
        .expect("valid gst setting");
        assert_eq!(setting.gst_name, "POOJA");
        assert_eq!(setting.percentage, 12.0);
    }

    #[test]
    fn presets_have_unique_keys() {
        let mut keys: Vec<_> = GST_NAME_OPTIONS.iter().map(|(key, _, _)| *key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), GST_NAME_OPTIONS.len());
    }
}
