//! Mock social graph for testing.

use partyline_social::{SocialEvent, SocialGraph, SocialGraphError, SocialUser};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock social graph.
///
/// Returns scripted events and identities. Clones share one call counter so
/// a test can hand a clone to the router and still inspect traffic.
#[derive(Debug, Clone, Default)]
pub struct MockSocialGraph {
    events: Vec<SocialEvent>,
    identities: HashMap<String, SocialUser>,
    failure: Option<SocialGraphError>,
    calls: Arc<AtomicUsize>,
}

impl MockSocialGraph {
    /// Create a mock with no events and no known tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every request with `error`.
    #[must_use]
    pub fn failing(error: SocialGraphError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Add an event every token is invited to.
    #[must_use]
    pub fn with_event(mut self, id: &str, name: &str) -> Self {
        self.events.push(SocialEvent {
            id: id.to_string(),
            name: name.to_string(),
            start_time: None,
            rsvp_status: Some("attending".to_string()),
        });
        self
    }

    /// Make `token` resolve to the user `user_id`.
    #[must_use]
    pub fn with_identity(mut self, token: &str, user_id: &str) -> Self {
        self.identities.insert(
            token.to_string(),
            SocialUser {
                id: user_id.to_string(),
                name: None,
            },
        );
        self
    }

    /// Number of requests served so far, across all clones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SocialGraph for MockSocialGraph {
    fn user_events(
        &self,
        _access_token: &str,
    ) -> impl Future<Output = partyline_social::Result<Vec<SocialEvent>>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self.failure.clone().map_or_else(|| Ok(self.events.clone()), Err);

        async move { result }
    }

    fn resolve_identity(
        &self,
        access_token: &str,
    ) -> impl Future<Output = partyline_social::Result<SocialUser>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = match &self.failure {
            Some(error) => Err(error.clone()),
            None => self
                .identities
                .get(access_token)
                .cloned()
                .ok_or(SocialGraphError::Unauthorized),
        };

        async move { result }
    }
}
