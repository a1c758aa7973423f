//! Undo against the shipped questionnaire

use cinepath::domain::{DecisionEngine, Phase, Step};
use cinepath::util::testing;

fn engine() -> DecisionEngine {
    testing::init_test_setup();
    DecisionEngine::new().expect("catalog loads")
}

#[test]
fn given_wrong_first_answer_when_undoing_and_correcting_then_matches_direct_walk() {
    // Arrange
    let engine = engine();
    let mut session = engine.replay(&[false]);
    assert_eq!(session.answers(), &[false]);

    // Act
    assert!(session.undo());
    let step = session.answer(true);

    // Assert
    assert_eq!(step, Step::Advanced);
    assert_eq!(session.answers(), &[true]);
    assert_eq!(session.current(), engine.replay(&[true]).current());
    assert_eq!(
        session.current_question(),
        Some("Do you want high-energy action")
    );
    assert_eq!(session.path(), &engine.traverse(&[true]).path[..]);
}

#[test]
fn given_fresh_session_when_undoing_then_nothing_changes() {
    let engine = engine();
    let mut session = engine.start_session();
    let root = session.current();

    assert!(!session.undo());
    assert!(!session.can_undo());
    assert_eq!(session.current(), root);
    assert!(session.path().is_empty());
}

#[test]
fn given_every_prefix_when_undoing_last_answer_then_equals_shorter_replay() {
    let engine = engine();
    let walks: [&[bool]; 3] = [
        &[false, true, true, true, false, false],
        &[true; 10],
        &[false; 8],
    ];

    for walk in walks {
        for len in 1..=walk.len() {
            let mut session = engine.replay(&walk[..len]);
            assert!(session.undo(), "undo after {len} answers");

            let shorter = engine.replay(&walk[..len - 1]);
            assert_eq!(session.current(), shorter.current());
            assert_eq!(session.path(), shorter.path());
            assert_eq!(session.answers(), shorter.answers());
            assert_eq!(session.undo_depth(), shorter.undo_depth());
        }
    }
}

#[test]
fn given_finished_session_when_undoing_then_answering_again() {
    let engine = engine();
    let mut session = engine.replay(&[false, true, true, true, false, false]);
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.answer(true), Step::Ignored);

    assert!(session.undo());

    assert_eq!(session.phase(), Phase::Answering);
    assert!(session.result().is_none());
    assert_eq!(session.answer(false), Step::Finished);
    assert_eq!(
        session.result().expect("finished").tags,
        engine.traverse(&[false, true, true, true, false, false]).tags
    );
}

#[test]
fn given_full_walk_when_undoing_to_root_then_stack_drains_exactly() {
    let engine = engine();
    let mut session = engine.replay(&[true; 10]);
    let root = engine.start_session().current();

    let mut undone = 0;
    while session.undo() {
        undone += 1;
    }

    assert_eq!(undone, 10);
    assert_eq!(session.current(), root);
    assert_eq!(session.undo_depth(), 0);
}

#[test]
fn given_session_when_restarting_then_back_at_root() {
    let engine = engine();
    let mut session = engine.replay(&[true, false, true]);

    session.restart();

    assert_eq!(session.current(), engine.start_session().current());
    assert!(session.answers().is_empty());
    assert!(!session.can_undo());
}
