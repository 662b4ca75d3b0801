use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    pub status: bool,
    /// "draft" until the location is published.
    pub publish_status: String,
}

impl Location {
    /// Blank editor values for the add form.
    pub fn reference() -> Self {
        Self {
            status: true,
            publish_status: "draft".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn new_locations_start_as_drafts() {
        let location = Location::reference();
        assert_eq!(location.publish_status, "draft");
        assert!(location.status);
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let location: Location = serde_json::from_str(
            r#"{"_id":"l1","locationName":"kashi-ghat","displayName":"Kashi Ghat","city":"Varanasi","locationType":"temple","status":true,"publishStatus":"published"}"#,
        )
        .expect("valid location");
        assert_eq!(location.city.as_deref(), Some("Varanasi"));
    }
}
