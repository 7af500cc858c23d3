//! Party store metrics.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `partyline_parties_registered_total{outcome}` - Registrations, `created` or `replaced`
//! - `partyline_votes_total{kind}` - Votes queued by kind
//! - `partyline_drains_total` - Playlist updates that drained a queue
//! - `partyline_events_drained_total` - Votes handed to playback clients
//!
//! ## Gauges
//! - `partyline_parties` - Parties currently registered
//!
//! Recording is a no-op until a recorder is installed, so library users and
//! tests pay nothing for these calls.

use crate::registry::Registration;
use crate::vote::VoteKind;
use metrics::{describe_counter, describe_gauge};

/// Register descriptions for every party metric.
///
/// Call once at startup, after installing a recorder.
pub fn register_party_metrics() {
    describe_counter!(
        "partyline_parties_registered_total",
        "Party registrations by outcome (created, replaced)"
    );
    describe_gauge!("partyline_parties", "Parties currently registered");
    describe_counter!("partyline_votes_total", "Votes queued by kind (up, down, null)");
    describe_counter!(
        "partyline_drains_total",
        "Playlist updates that drained a vote queue"
    );
    describe_counter!(
        "partyline_events_drained_total",
        "Votes delivered to playback clients"
    );

    tracing::debug!("Party metrics registered");
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn record_registration(outcome: Registration, party_count: usize) {
    metrics::counter!("partyline_parties_registered_total", "outcome" => outcome.as_str())
        .increment(1);
    metrics::gauge!("partyline_parties").set(party_count as f64);
}

pub(crate) fn record_vote(kind: VoteKind) {
    metrics::counter!("partyline_votes_total", "kind" => kind.as_str()).increment(1);
}

pub(crate) fn record_drain(drained: usize) {
    metrics::counter!("partyline_drains_total").increment(1);
    metrics::counter!("partyline_events_drained_total").increment(drained as u64);
}
