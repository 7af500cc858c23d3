//! Given-When-Then driver for party services
//!
//! Registers parties (Given), replays votes and playlist updates in order
//! (When), then runs assertions against what the last update drained, the
//! errors raised along the way, and the final service state (Then).

use partyline_core::{Bytes, Event, PartyError, PartyId, PartyService, SongId, UserId, VoteKind};

/// Type alias for drained-events assertion functions
type DrainAssertion = Box<dyn FnOnce(&[Event])>;

/// Type alias for error assertion functions
type ErrorAssertion = Box<dyn FnOnce(&[PartyError])>;

/// Type alias for service assertion functions
type ServiceAssertion = Box<dyn FnOnce(&PartyService)>;

#[derive(Debug, Clone)]
enum Step {
    Vote {
        party: PartyId,
        song: SongId,
        user: UserId,
        kind: VoteKind,
    },
    Playlist {
        party: PartyId,
        playlist: Bytes,
    },
    Register {
        party: PartyId,
        library: Bytes,
    },
}

/// Fluent API for testing party services with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use partyline_core::{PartyError, VoteKind};
/// use partyline_testing::PartyScenario;
///
/// PartyScenario::new()
///     .given_party("p1", "L")
///     .when_vote("ghost", "s1", "u1", VoteKind::Up)
///     .then_errors(|errors| {
///         assert!(matches!(errors, [PartyError::NotFound(_)]));
///     })
///     .run();
/// ```
pub struct PartyScenario {
    service: PartyService,
    steps: Vec<Step>,
    drain_assertions: Vec<DrainAssertion>,
    error_assertions: Vec<ErrorAssertion>,
    service_assertions: Vec<ServiceAssertion>,
}

impl Default for PartyScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyScenario {
    /// Create a scenario over a fresh service
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(PartyService::new())
    }

    /// Create a scenario over an existing service
    #[must_use]
    pub const fn with_service(service: PartyService) -> Self {
        Self {
            service,
            steps: Vec::new(),
            drain_assertions: Vec::new(),
            error_assertions: Vec::new(),
            service_assertions: Vec::new(),
        }
    }

    /// Register a party before any step runs (Given)
    #[must_use]
    pub fn given_party(self, party: &str, library: &str) -> Self {
        self.service
            .register_party(PartyId::new(party), Bytes::from(library.to_string()));
        self
    }

    /// Cast a vote (When)
    #[must_use]
    pub fn when_vote(mut self, party: &str, song: &str, user: &str, kind: VoteKind) -> Self {
        self.steps.push(Step::Vote {
            party: PartyId::new(party),
            song: SongId::new(song),
            user: UserId::new(user),
            kind,
        });
        self
    }

    /// Push a playlist and drain the party's votes (When)
    #[must_use]
    pub fn when_playlist(mut self, party: &str, playlist: &str) -> Self {
        self.steps.push(Step::Playlist {
            party: PartyId::new(party),
            playlist: Bytes::from(playlist.to_string()),
        });
        self
    }

    /// Register or re-register a party mid-scenario (When)
    #[must_use]
    pub fn when_registered(mut self, party: &str, library: &str) -> Self {
        self.steps.push(Step::Register {
            party: PartyId::new(party),
            library: Bytes::from(library.to_string()),
        });
        self
    }

    /// Assert on the events drained by the last playlist update (Then)
    #[must_use]
    pub fn then_drained<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Event]) + 'static,
    {
        self.drain_assertions.push(Box::new(assertion));
        self
    }

    /// Assert on every error raised by the steps, in order (Then)
    #[must_use]
    pub fn then_errors<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[PartyError]) + 'static,
    {
        self.error_assertions.push(Box::new(assertion));
        self
    }

    /// Assert on the service after all steps ran (Then)
    #[must_use]
    pub fn then_service<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&PartyService) + 'static,
    {
        self.service_assertions.push(Box::new(assertion));
        self
    }

    /// Run the steps and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if any assertion fails.
    pub fn run(self) {
        let mut last_drain = Vec::new();
        let mut errors = Vec::new();

        for step in self.steps {
            let result = match step {
                Step::Vote {
                    party,
                    song,
                    user,
                    kind,
                } => self.service.cast_vote(&party, song, user, kind),
                Step::Playlist { party, playlist } => self
                    .service
                    .set_playlist(&party, playlist)
                    .map(|drained| last_drain = drained),
                Step::Register { party, library } => {
                    self.service.register_party(party, library);
                    Ok(())
                }
            };
            if let Err(error) = result {
                errors.push(error);
            }
        }

        for assertion in self.drain_assertions {
            assertion(&last_drain);
        }

        for assertion in self.error_assertions {
            assertion(&errors);
        }

        for assertion in self.service_assertions {
            assertion(&self.service);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_drained_in_order() {
        PartyScenario::new()
            .given_party("p1", "L")
            .when_vote("p1", "s1", "u1", VoteKind::Up)
            .when_vote("p1", "s2", "u2", VoteKind::Down)
            .when_playlist("p1", "PL")
            .then_drained(|events| {
                assert_eq!(
                    events,
                    [
                        Event::new(VoteKind::Up, UserId::new("u1"), SongId::new("s1")),
                        Event::new(VoteKind::Down, UserId::new("u2"), SongId::new("s2")),
                    ]
                );
            })
            .then_errors(|errors| assert!(errors.is_empty()))
            .run();
    }

    #[test]
    fn test_second_update_drains_nothing() {
        PartyScenario::new()
            .given_party("p1", "L")
            .when_vote("p1", "s1", "u1", VoteKind::Up)
            .when_playlist("p1", "PL")
            .when_playlist("p1", "PL2")
            .then_drained(|events| assert!(events.is_empty()))
            .then_service(|service| {
                let playlist = service.get_playlist(&PartyId::new("p1")).unwrap();
                assert_eq!(playlist, Bytes::from_static(b"PL2"));
            })
            .run();
    }

    #[test]
    fn test_reregistration_drops_pending_votes() {
        PartyScenario::new()
            .given_party("p1", "L1")
            .when_vote("p1", "s1", "u1", VoteKind::Up)
            .when_registered("p1", "L2")
            .when_playlist("p1", "PL")
            .then_drained(|events| assert!(events.is_empty()))
            .run();
    }

    #[test]
    fn test_unknown_party_errors_collected() {
        PartyScenario::new()
            .when_vote("ghost", "s1", "u1", VoteKind::Neutral)
            .when_playlist("ghost", "PL")
            .then_errors(|errors| {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().all(|e| matches!(e, PartyError::NotFound(_))));
            })
            .then_service(|service| assert!(service.list_party_ids().is_empty()))
            .run();
    }
}
