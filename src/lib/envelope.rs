//! Response envelopes used by the back-office REST API. Single resources come
//! back as `{ "data": <resource> }`; paginated collections come back as
//! `{ "data": { "list": [...], "pagination": { "total": n } } }`. Feature
//! clients deserialize into these wrappers and hand the inner payload to the
//! UI.

use serde::Deserialize;

/// `{ "data": ... }` wrapper around a single resource or plain collection.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `{ "data": { "list": [...], "pagination": {...} } }` wrapper around a
/// paginated collection.
#[derive(Clone, Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: ListData<T>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListData<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
}

/// A page of results plus the server-reported total, as consumed by list
/// views with pagers.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        Self {
            total: envelope.data.pagination.total,
            items: envelope.data.list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Envelope, ListEnvelope, Page};

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Widget {
        name: String,
    }

    #[test]
    fn envelope_unwraps_single_resource() {
        let envelope: Envelope<Widget> =
            serde_json::from_str(r#"{"data":{"name":"tds"}}"#).expect("valid envelope");
        assert_eq!(envelope.data.name, "tds");
    }

    #[test]
    fn envelope_unwraps_plain_collection() {
        let envelope: Envelope<Vec<Widget>> =
            serde_json::from_str(r#"{"data":[{"name":"a"},{"name":"b"}]}"#)
                .expect("valid envelope");
        assert_eq!(envelope.data.len(), 2);
    }

    #[test]
    fn list_envelope_carries_items_and_total() {
        let envelope: ListEnvelope<Widget> = serde_json::from_str(
            r#"{"data":{"list":[{"name":"a"}],"pagination":{"total":41}}}"#,
        )
        .expect("valid list envelope");
        let page = Page::from(envelope);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 41);
    }

    #[test]
    fn list_envelope_tolerates_missing_pagination() {
        let envelope: ListEnvelope<Widget> =
            serde_json::from_str(r#"{"data":{"list":[]}}"#).expect("valid list envelope");
        let page = Page::from(envelope);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
