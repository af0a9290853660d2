use url::form_urlencoded;

use crate::types::Document;
use crate::view::ViewKey;

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLink {
    pub key: ViewKey,
    pub label: String,
}

impl ViewLink {
    fn new(key: ViewKey) -> Self {
        let label = key.label().to_string();
        Self { key, label }
    }

    /// Relative link that selects this view through `param`.
    pub fn href(&self, param: &str) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair(param, self.key.as_str())
            .finish();
        format!("?{}", query)
    }
}

/// Aggregate first, every date in document order, special students last.
pub fn list_views(document: &Document) -> Vec<ViewLink> {
    std::iter::once(ViewKey::Aggregate)
        .chain(document.by_date.keys().map(|date| ViewKey::Date(date.clone())))
        .chain(std::iter::once(ViewKey::SpecialStudents))
        .map(ViewLink::new)
        .collect()
}

/// Reads `param` from a raw query string (with or without the leading `?`).
/// Absent or empty selects the aggregate; anything else is passed through
/// verbatim.
pub fn resolve_current_key(query: &str, param: &str) -> ViewKey {
    query_param(query, param)
        .filter(|value| !value.is_empty())
        .map(|value| ViewKey::from_param(&value))
        .unwrap_or_default()
}

/// First value of `name` in a raw query string, percent-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{extract, View};
    use serde_json::json;

    fn two_day_document() -> Document {
        serde_json::from_value(json!({
            "aggregate": {},
            "by_date": { "2024-01-01": {}, "2024-01-02": {} },
            "special_students": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_list_views_order() {
        let links = list_views(&two_day_document());
        let keys: Vec<&str> = links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["aggregate", "2024-01-01", "2024-01-02", "special_students"]
        );
        assert_eq!(links[0].label, "Aggregate");
        assert_eq!(links[3].label, "Special Students");
    }

    #[test]
    fn test_malformed_date_block_still_gets_a_link() {
        let doc = Document::from_json(
            r#"{ "by_date": { "2024-01-01": { "total_participants": 3 }, "2024-01-02": "oops" } }"#,
        )
        .unwrap();
        let links = list_views(&doc);
        assert_eq!(links.len(), 4);

        let key = resolve_current_key("?page=2024-01-01", "page");
        assert!(matches!(extract(&doc, &key), View::Standard { .. }));
    }

    #[test]
    fn test_list_views_on_empty_document() {
        let links = list_views(&Document::default());
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].key, ViewKey::Aggregate);
        assert_eq!(links[1].key, ViewKey::SpecialStudents);
    }

    #[test]
    fn test_resolve_without_param_is_aggregate() {
        assert_eq!(resolve_current_key("", "page"), ViewKey::Aggregate);
        assert_eq!(resolve_current_key("?other=1", "page"), ViewKey::Aggregate);
        assert_eq!(resolve_current_key("?page=", "page"), ViewKey::Aggregate);
    }

    #[test]
    fn test_resolve_date_param_selects_date_view() {
        let doc = two_day_document();
        let key = resolve_current_key("?page=2024-01-01", "page");
        assert_eq!(key, ViewKey::Date("2024-01-01".to_string()));
        assert!(matches!(extract(&doc, &key), View::Standard { .. }));
    }

    #[test]
    fn test_resolve_bogus_param_flows_to_not_found() {
        let doc = two_day_document();
        let key = resolve_current_key("page=bogus", "page");
        assert!(matches!(extract(&doc, &key), View::NotFound(_)));
    }

    #[test]
    fn test_resolve_decodes_percent_encoding() {
        assert_eq!(
            resolve_current_key("?page=2024%2F01%2F01", "page"),
            ViewKey::Date("2024/01/01".to_string())
        );
    }

    #[test]
    fn test_query_param_lookup() {
        assert_eq!(query_param("?demo=1&page=x", "demo").as_deref(), Some("1"));
        assert_eq!(query_param("page=x", "demo"), None);
    }

    #[test]
    fn test_href_encodes_key() {
        let link = ViewLink::new(ViewKey::Date("2024/01/01".to_string()));
        assert_eq!(link.href("page"), "?page=2024%2F01%2F01");
        assert_eq!(ViewLink::new(ViewKey::Aggregate).href("view"), "?view=aggregate");
    }
}
