//! Match engine integration tests.
//!
//! These tests walk the turn protocol through full rounds:
//! - The two-pair letters scenario, event by event
//! - Lock behavior under rapid input
//! - Attempt counting and terminal state

use memory_match::cards::CardId;
use memory_match::core::RoundMode;
use memory_match::engine::{MatchEngine, MatchEvent, TurnPhase};
use memory_match::round::RoundGenerator;

fn engine(mode: RoundMode, pair_count: usize, seed: u64) -> MatchEngine {
    let round = RoundGenerator::new(seed).generate(mode, pair_count).unwrap();
    MatchEngine::new(round)
}

fn flipped(id: &str) -> impl Fn(&MatchEvent) -> bool + '_ {
    move |event: &MatchEvent| matches!(event, MatchEvent::CardFlipped { card } if card.id.as_str() == id)
}

/// Letters, two pairs: mismatch, then both matches, then completion.
#[test]
fn test_two_pair_scenario() {
    let mut engine = engine(RoundMode::Letters, 2, 9);
    assert_eq!(engine.round().len(), 4);

    let events = engine.reveal("upper-A");
    assert_eq!(events.len(), 1);
    assert!(flipped("upper-A")(&events[0]));

    let events = engine.reveal("lower-b");
    assert_eq!(
        events.to_vec(),
        vec![
            MatchEvent::AttemptRecorded { attempts: 1 },
            MatchEvent::MismatchFound,
        ]
    );
    assert_eq!(engine.phase(), TurnPhase::Locked);

    engine.resolve_mismatch();
    assert_eq!(engine.phase(), TurnPhase::Idle);
    assert!(engine.turn().matched_ids.is_empty());

    let events = engine.reveal("upper-A");
    assert!(flipped("upper-A")(&events[0]));
    let events = engine.reveal("lower-a");
    assert_eq!(
        events.to_vec(),
        vec![
            MatchEvent::AttemptRecorded { attempts: 2 },
            MatchEvent::MatchFound {
                matches: 1,
                pair_count: 2
            },
        ]
    );

    engine.reveal("upper-B");
    let events = engine.reveal("lower-b");
    assert_eq!(
        events.to_vec(),
        vec![
            MatchEvent::AttemptRecorded { attempts: 3 },
            MatchEvent::MatchFound {
                matches: 2,
                pair_count: 2
            },
            MatchEvent::RoundComplete { attempts: 3 },
        ]
    );
    assert_eq!(engine.phase(), TurnPhase::Complete);
}

/// After completion nothing is accepted.
#[test]
fn test_reveals_after_completion_are_ignored() {
    let mut engine = engine(RoundMode::Numbers, 2, 4);
    for n in 1..=2 {
        engine.reveal(&format!("num-{}", n));
        engine.reveal(&format!("count-{}", n));
    }
    assert!(engine.is_complete());

    let before = engine.tally();
    for id in ["num-1", "count-2", "num-2", "count-1"] {
        assert!(engine.reveal(id).is_empty());
    }
    assert_eq!(engine.tally(), before);
    assert_eq!(engine.resolve_mismatch(), None);
    assert_eq!(engine.phase(), TurnPhase::Complete);
}

/// A burst of input while locked neither moves cards nor counts attempts.
#[test]
fn test_rapid_input_while_locked() {
    let mut engine = engine(RoundMode::Letters, 6, 1);
    engine.reveal("upper-A");
    engine.reveal("lower-c");

    for id in ["upper-B", "lower-a", "upper-A", "lower-c", "upper-F"] {
        assert!(engine.reveal(id).is_empty(), "{} accepted while locked", id);
    }

    assert_eq!(engine.tally().attempts, 1);
    assert_eq!(
        engine.turn().first_revealed.as_ref().map(|c| c.id.clone()),
        Some(CardId::from("upper-A"))
    );
    assert_eq!(
        engine.turn().second_revealed.as_ref().map(|c| c.id.clone()),
        Some(CardId::from("lower-c"))
    );
}

/// Attempts count completed pairs of reveals only.
#[test]
fn test_attempts_count_pairs_of_reveals() {
    let mut engine = engine(RoundMode::Letters, 6, 8);

    engine.reveal("upper-A");
    assert_eq!(engine.tally().attempts, 0);

    engine.reveal("upper-A");
    assert_eq!(engine.tally().attempts, 0);

    engine.reveal("upper-B");
    assert_eq!(engine.tally().attempts, 1);
    engine.resolve_mismatch();

    engine.reveal("lower-b");
    assert_eq!(engine.tally().attempts, 1);
    engine.reveal("upper-B");
    assert_eq!(engine.tally().attempts, 2);
    assert_eq!(engine.tally().matches, 1);
}

/// A match produces no mismatch event and vice versa.
#[test]
fn test_match_and_mismatch_are_exclusive() {
    let mut engine = engine(RoundMode::Numbers, 9, 31);

    engine.reveal("num-4");
    let events = engine.reveal("count-4");
    let found = events.iter().filter(|e| matches!(e, MatchEvent::MatchFound { .. })).count();
    let missed = events.iter().filter(|e| **e == MatchEvent::MismatchFound).count();
    assert_eq!((found, missed), (1, 0));

    engine.reveal("num-5");
    let events = engine.reveal("count-6");
    let found = events.iter().filter(|e| matches!(e, MatchEvent::MatchFound { .. })).count();
    let missed = events.iter().filter(|e| **e == MatchEvent::MismatchFound).count();
    assert_eq!((found, missed), (0, 1));
}

/// Two cards of the same pair revealed in either order still match.
#[test]
fn test_match_is_order_independent() {
    let mut engine = engine(RoundMode::Letters, 3, 6);

    engine.reveal("lower-c");
    let events = engine.reveal("upper-C");
    assert!(events.iter().any(|e| matches!(e, MatchEvent::MatchFound { .. })));
}

/// A perfect game finishes with attempts equal to pairs.
#[test]
fn test_perfect_game() {
    let mut engine = engine(RoundMode::Letters, 13, 10);
    let mut last = Vec::new();

    for letter in "ABCDEFGHIJKLM".chars() {
        engine.reveal(&format!("upper-{}", letter));
        last = engine
            .reveal(&format!("lower-{}", letter.to_ascii_lowercase()))
            .to_vec();
    }

    assert_eq!(last.last(), Some(&MatchEvent::RoundComplete { attempts: 13 }));
    assert_eq!(engine.tally().matches, 13);
    assert!(engine.round().ids().all(|id| engine.is_face_up(id.as_str())));
}
