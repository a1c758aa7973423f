//! Property checks over random answer sequences

use std::sync::OnceLock;

use proptest::prelude::*;

use cinepath::domain::{DecisionEngine, Phase};

fn engine() -> &'static DecisionEngine {
    static ENGINE: OnceLock<DecisionEngine> = OnceLock::new();
    ENGINE.get_or_init(|| DecisionEngine::new().expect("catalog loads"))
}

fn answers() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 0..16)
}

proptest! {
    #[test]
    fn traversal_is_deterministic(answers in answers()) {
        let engine = engine();
        prop_assert_eq!(engine.traverse(&answers), engine.traverse(&answers));
    }

    #[test]
    fn counters_track_path_and_stay_within_height(answers in answers()) {
        let engine = engine();
        let result = engine.traverse(&answers);

        prop_assert_eq!(result.visited_nodes, result.path.len());
        prop_assert_eq!(result.depth, result.path.len());
        prop_assert!(result.depth <= answers.len());
        prop_assert!(result.depth <= engine.stats().height);
    }

    #[test]
    fn shorter_answers_walk_a_prefix_of_the_path(answers in answers(), cut in 0usize..16) {
        let engine = engine();
        let cut = cut.min(answers.len());

        let full = engine.traverse(&answers);
        let partial = engine.traverse(&answers[..cut]);

        prop_assert!(full.path.starts_with(&partial.path));
        if partial.reached_leaf() {
            prop_assert_eq!(&full, &partial);
        }
    }

    #[test]
    fn undo_equals_replaying_one_answer_less(answers in answers()) {
        let engine = engine();
        let mut session = engine.replay(&answers);
        let applied = session.answers().to_vec();

        if applied.is_empty() {
            prop_assert!(!session.undo());
        } else {
            prop_assert!(session.undo());
            let shorter = engine.replay(&applied[..applied.len() - 1]);
            prop_assert_eq!(session.current(), shorter.current());
            prop_assert_eq!(session.path(), shorter.path());
        }
    }

    #[test]
    fn finished_session_agrees_with_traversal(answers in answers()) {
        let engine = engine();
        let session = engine.replay(&answers);
        let result = engine.traverse(&answers);

        match session.phase() {
            Phase::Finished => {
                prop_assert!(result.reached_leaf());
                prop_assert_eq!(session.result(), Some(result));
            }
            Phase::Answering => {
                prop_assert!(!result.reached_leaf());
                prop_assert!(session.result().is_none());
            }
        }
    }
}
