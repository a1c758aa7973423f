//! Walks over the shipped questionnaire

use rstest::rstest;

use cinepath::domain::genre::{ACTION, COMEDY, DRAMA, MYSTERY, ROMANCE, SCIENCE_FICTION};
use cinepath::domain::{traverse, DecisionEngine, GenreId, QuestionTree};
use cinepath::util::testing;

const ROOT_QUESTION: &str = "Are you in the mood for something energized and exciting?";

fn engine() -> DecisionEngine {
    testing::init_test_setup();
    DecisionEngine::new().expect("catalog loads")
}

#[test]
fn given_comedy_answers_when_traversing_then_ends_on_comedy_leaf() {
    // Arrange
    let engine = engine();
    let answers = [false, true, true, true, false, false];

    // Act
    let result = engine.traverse(&answers);

    // Assert
    assert_eq!(result.tags, vec![COMEDY]);
    assert_eq!(result.path.len(), 6);
    assert_eq!(result.path[0], ROOT_QUESTION);
    assert_eq!(result.path[1], "Do you prefer something comforting?");
    assert_eq!(result.visited_nodes, 6);
    assert_eq!(result.depth, 6);
    assert!(result.reached_leaf());
}

#[test]
fn given_all_yes_when_traversing_then_action_sci_fi() {
    let engine = engine();

    let result = engine.traverse(&[true; 10]);

    assert_eq!(result.tags, vec![ACTION, SCIENCE_FICTION]);
    assert_eq!(result.path.len(), 10);
    assert_eq!(result.path[1], "Do you want high-energy action");
}

#[test]
fn given_no_answers_when_traversing_then_nothing_visited() {
    let engine = engine();

    let result = engine.traverse(&[]);

    assert!(result.tags.is_empty());
    assert!(result.path.is_empty());
    assert_eq!(result.visited_nodes, 0);
    assert_eq!(result.depth, 0);
    assert!(!result.reached_leaf());
}

#[rstest]
#[case(&[true, true, false, true, true, true, true, true, true, true], 9, &[COMEDY, ROMANCE])]
#[case(&[false; 12], 8, &[DRAMA, MYSTERY])]
#[case(&[true, false, false, false], 4, &[])]
#[case(&[false, true, true, true, false, false, true, true], 6, &[COMEDY])]
fn given_answer_sequence_when_traversing_then_path_and_tags_match(
    #[case] answers: &[bool],
    #[case] path_len: usize,
    #[case] tags: &[GenreId],
) {
    let engine = engine();

    let result = engine.traverse(answers);

    assert_eq!(result.path.len(), path_len);
    assert_eq!(result.depth, path_len);
    assert_eq!(result.tags, tags);
}

#[test]
fn given_same_answers_when_traversing_twice_then_results_equal() {
    let engine = engine();
    let answers = [true, false, true, true, false, true, false, true];

    let first = engine.traverse(&answers);
    let second = engine.traverse(&answers);

    assert_eq!(first, second);
}

#[test]
fn given_leaf_reached_when_appending_answers_then_result_unchanged() {
    let engine = engine();
    let answers = [false, true, true, true, false, false];

    let exact = engine.traverse(&answers);
    let mut padded = answers.to_vec();
    padded.extend([true, false, true]);

    assert_eq!(engine.traverse(&padded), exact);
}

#[test]
fn given_two_trees_when_traversing_then_free_function_matches_engine() {
    let engine = engine();
    let tree = QuestionTree::catalog().expect("catalog loads");

    let answers = [true; 10];

    assert_eq!(traverse(&tree, &answers), engine.traverse(&answers));
}

#[test]
fn given_walk_when_timing_then_elapsed_is_reported_in_ms() {
    let engine = engine();

    let result = engine.traverse(&[true; 10]);

    assert!(result.elapsed_ms() >= 0.0);
    assert_eq!(result.elapsed_ms(), result.elapsed.as_secs_f64() * 1000.0);
}
