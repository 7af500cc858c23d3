//! Payloads returned by the social graph

use serde::{Deserialize, Serialize};

/// An event the token holder was invited to.
///
/// Party ids are the ids of these events: a host registers a party under the
/// id of the event they are throwing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialEvent {
    /// Event id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Start time as reported by the graph (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Invitation state (`attending`, `maybe`, `declined`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<String>,
}

/// Identity behind an access token
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialUser {
    /// Stable user id
    pub id: String,
    /// Display name, when the token grants it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One page of a graph edge (`{"data": [...]}`)
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GraphPage<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_event_page_parses_sparse_fields() {
        let page: GraphPage<SocialEvent> = serde_json::from_str(
            r#"{"data":[{"id":"123","name":"Rooftop"},{"id":"456"}],"paging":{"cursors":{}}}"#,
        )
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name, "Rooftop");
        assert_eq!(page.data[1].name, "");
        assert!(page.data[1].start_time.is_none());
    }
}
