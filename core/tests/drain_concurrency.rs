//! Concurrency tests for vote draining.
//!
//! Many voters hammer one party while a playback client drains it in a
//! loop. Every vote must come out of exactly one drain, and each voter's
//! votes must come out in the order that voter cast them.
//!
//! Run with: `cargo test -p partyline-core --test drain_concurrency`

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code can use unwrap/expect

use partyline_core::{Bytes, Event, PartyError, PartyId, PartyService, SongId, UserId, VoteKind};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

const VOTERS: usize = 8;
const VOTES_PER_VOTER: usize = 500;

fn kind_for(n: usize) -> VoteKind {
    VoteKind::ALL[n % VoteKind::ALL.len()]
}

#[test]
fn test_concurrent_votes_drain_exactly_once() {
    let service = PartyService::new();
    let party = PartyId::new("p1");
    service.register_party(party.clone(), Bytes::from_static(b"L"));

    let voters_done = AtomicBool::new(false);

    let mut batches: Vec<Vec<Event>> = std::thread::scope(|scope| {
        let drainer = scope.spawn(|| {
            let mut batches = Vec::new();
            let mut round = 0_u64;
            while !voters_done.load(Ordering::Acquire) {
                let playlist = Bytes::from(format!("PL{round}"));
                batches.push(service.set_playlist(&party, playlist).unwrap());
                round += 1;
                std::thread::yield_now();
            }
            batches
        });

        let voters: Vec<_> = (0..VOTERS)
            .map(|voter| {
                let service = &service;
                let party = &party;
                scope.spawn(move || {
                    for n in 0..VOTES_PER_VOTER {
                        service
                            .cast_vote(
                                party,
                                SongId::new(format!("{voter}:{n}")),
                                UserId::new(format!("u{voter}")),
                                kind_for(n),
                            )
                            .unwrap();
                    }
                })
            })
            .collect();

        for voter in voters {
            voter.join().expect("voter thread panicked");
        }
        voters_done.store(true, Ordering::Release);
        drainer.join().expect("drainer thread panicked")
    });

    // Whatever arrived after the drainer's last pass
    batches.push(service.set_playlist(&party, Bytes::new()).unwrap());

    let all: Vec<Event> = batches.into_iter().flatten().collect();
    assert_eq!(all.len(), VOTERS * VOTES_PER_VOTER);

    let unique: HashSet<&str> = all.iter().map(|e| e.song_id().as_str()).collect();
    assert_eq!(unique.len(), all.len(), "a vote was delivered twice");

    let mut next_expected: HashMap<&str, usize> = HashMap::new();
    for event in &all {
        let (voter, n) = event.song_id().as_str().split_once(':').unwrap();
        let n: usize = n.parse().unwrap();
        let expected = next_expected.entry(voter).or_insert(0);
        assert_eq!(n, *expected, "voter {voter} votes out of order");
        assert_eq!(event.kind(), kind_for(n));
        assert_eq!(event.user_id().as_str(), format!("u{voter}"));
        *expected += 1;
    }

    assert!(service.set_playlist(&party, Bytes::new()).unwrap().is_empty());
}

#[test]
fn test_parties_do_not_share_queues() {
    let service = PartyService::new();
    let ids: Vec<PartyId> = (0..4).map(|n| PartyId::new(format!("party-{n}"))).collect();
    for id in &ids {
        service.register_party(id.clone(), Bytes::new());
    }

    std::thread::scope(|scope| {
        for id in &ids {
            let service = &service;
            scope.spawn(move || {
                for n in 0..100 {
                    service
                        .cast_vote(id, SongId::new(format!("s{n}")), UserId::new(id.as_str()), VoteKind::Up)
                        .unwrap();
                }
            });
        }
    });

    for id in &ids {
        let events = service.set_playlist(id, Bytes::new()).unwrap();
        assert_eq!(events.len(), 100);
        assert!(events.iter().all(|e| e.user_id().as_str() == id.as_str()));
    }
}

#[test]
fn test_concurrent_registration_and_lookup() {
    let service = PartyService::new();

    std::thread::scope(|scope| {
        for writer in 0..4 {
            let service = &service;
            scope.spawn(move || {
                for n in 0..50 {
                    service.register_party(
                        PartyId::new(format!("w{writer}-{n}")),
                        Bytes::from(format!("library {writer}-{n}")),
                    );
                }
            });
        }

        let service = &service;
        scope.spawn(move || {
            for _ in 0..200 {
                for id in service.list_party_ids() {
                    // Anything listed is fully constructed
                    let library = service.get_library(&id).unwrap();
                    let expected = format!("library {}", &id.as_str()[1..]);
                    assert_eq!(library, Bytes::from(expected));
                }
            }
        });
    });

    assert_eq!(service.list_party_ids().len(), 200);
    assert!(matches!(
        service.get_library(&PartyId::new("missing")),
        Err(PartyError::NotFound(_))
    ));
}
