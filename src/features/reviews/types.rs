use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PujaReview {
    pub id: String,
    pub customer_name: String,
    pub customer_id: String,
    pub service_name: String,
    pub rating: f32,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::PujaReview;

    #[test]
    fn deserializes_the_wire_shape() {
        let review: PujaReview = serde_json::from_str(
            r#"{"id":"r1","customerName":"Meera","customerId":"c9","serviceName":"Griha Pravesh","rating":4.5,"review":"Punctual and thorough."}"#,
        )
        .expect("valid review");
        assert_eq!(review.rating, 4.5);
        assert!(review.date.is_none());
    }
}
