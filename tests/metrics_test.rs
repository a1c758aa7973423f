//! Metrics of the shipped questionnaire

use std::collections::HashSet;

use cinepath::domain::metrics::{
    all_questions, height, leaf_count, theoretical_balanced_depth, total_nodes,
};
use cinepath::domain::{QuestionTree, TreeStats};
use cinepath::util::testing;

fn tree() -> QuestionTree {
    testing::init_test_setup();
    QuestionTree::catalog().expect("catalog loads")
}

#[test]
fn given_catalog_when_measuring_then_known_figures() {
    // Arrange
    let tree = tree();

    // Act
    let stats = TreeStats::of(&tree);

    // Assert
    assert_eq!(stats.height, 12);
    assert_eq!(stats.total_nodes, 409);
    assert_eq!(stats.leaf_count, 205);
    assert_eq!(stats.balanced_depth, 9);
    assert_eq!(stats.question_count(), 204);
}

#[test]
fn given_catalog_when_computing_balanced_depth_then_below_height() {
    let tree = tree();

    let balanced = theoretical_balanced_depth(&tree);

    assert_eq!(balanced, 9);
    assert!(balanced <= height(&tree));
}

#[test]
fn given_catalog_when_counting_nodes_then_arena_and_recursion_agree() {
    let tree = tree();

    assert_eq!(total_nodes(&tree), tree.len());
    assert_eq!(tree.iter().count(), tree.len());
    assert_eq!(tree.iter_breadth_first().count(), tree.len());
}

#[test]
fn given_catalog_when_enumerating_breadth_first_then_questions_plus_leaves_equal_total() {
    let tree = tree();

    let enumerated = all_questions(&tree).len() + leaf_count(&tree);

    assert_eq!(enumerated, total_nodes(&tree));
    assert_eq!(
        theoretical_balanced_depth(&tree),
        ((enumerated + 1) as f64).log2().ceil() as usize
    );
}

#[test]
fn given_catalog_when_scanning_nodes_then_leaves_carry_only_tags() {
    let tree = tree();

    for (_, node) in tree.iter() {
        if node.is_leaf() {
            assert!(node.yes.is_none() && node.no.is_none());
            assert!(!node.tag_slice().is_empty());
        } else {
            assert!(node.tags.is_none());
            assert!(node.yes.is_some() || node.no.is_some());
        }
    }
    assert_eq!(tree.iter().filter(|(_, n)| n.is_leaf()).count(), leaf_count(&tree));
}

#[test]
fn given_catalog_when_listing_questions_then_breadth_first_from_root() {
    let tree = tree();

    let questions = all_questions(&tree);

    assert_eq!(questions.len(), 204);
    assert_eq!(
        questions[0],
        "Are you in the mood for something energized and exciting?"
    );
    assert_eq!(questions[1], "Do you want high-energy action");
    assert_eq!(questions[2], "Do you prefer something comforting?");
    assert!(questions.iter().all(|q| !q.trim().is_empty()));
}

#[test]
fn given_catalog_when_listing_questions_then_texts_repeat_across_branches() {
    let tree = tree();

    let unique: HashSet<&str> = all_questions(&tree).into_iter().collect();

    assert_eq!(unique.len(), 183);
}

#[test]
fn given_any_walk_when_comparing_depth_then_never_exceeds_height() {
    let tree = tree();
    let h = height(&tree);
    let walks: [&[bool]; 4] = [&[true; 12], &[false; 12], &[true, false, true, false, true, false], &[]];

    for walk in walks {
        let result = cinepath::domain::traverse(&tree, walk);
        assert!(result.depth <= h);
    }
}
