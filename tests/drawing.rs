use exptree::{
    ExpressionTree,
    interpreter::drawing::{CANVAS_ROWS, CANVAS_WIDTH, Canvas},
};
use pretty_assertions::assert_eq;

/// Canvas rows with trailing spaces removed and trailing blank rows dropped.
fn trimmed_rows(tree: &ExpressionTree) -> Vec<String> {
    let drawing = tree.drawing().expect("tree should be drawable");
    assert_eq!(drawing.rows.len(), CANVAS_ROWS);
    assert!(drawing.rows.iter().all(|row| row.chars().count() == CANVAS_WIDTH));

    let mut rows: Vec<String> = drawing.rows.iter().map(|row| row.trim_end().to_string()).collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows
}

#[test]
fn draws_a_small_tree_without_values() {
    let tree = ExpressionTree::parse("+ 1 1");

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       +",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   1                                       1",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(true));
}

#[test]
fn annotates_operators_after_evaluation() {
    let mut tree = ExpressionTree::parse("+ 1 1");
    tree.eval();

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       + (2)",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   1                                       1",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(true));
}

#[test]
fn annotates_every_level() {
    let mut tree = ExpressionTree::parse("* + 1 2 - 10 4");
    tree.eval();

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       * (18)",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   + (3)                                   - (6)",
                   "          _________|_________                     _________|_________",
                   "         |                   |                   |                   |",
                   "         1                   2                   10                  4",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(true));
}

#[test]
fn marks_overflowed_nodes_as_big() {
    let mut tree = ExpressionTree::parse("2147483647+1");
    tree.eval();

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       + (BIG)",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   2147483647                              1",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(true));
}

#[test]
fn marks_subtrees_below_the_fifth_level() {
    let tree = ExpressionTree::parse("+ + + + + + 1 1 1 1 1 1 1");

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       +",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   +                                       1",
                   "          _________|_________",
                   "         |                   |",
                   "         +                   1",
                   "     ____|____",
                   "    |         |",
                   "    +         1",
                   "  __|_",
                   " |    |",
                   " +    1",
                   " |",
                   " X",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(false));
}

#[test]
fn marks_labels_wider_than_their_spread() {
    let tree = ExpressionTree::parse("+ + + + 12345 1 1 1 1");

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       +",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   +                                       1",
                   "          _________|_________",
                   "         |                   |",
                   "         +                   1",
                   "     ____|____",
                   "    |         |",
                   "    +         1",
                   "  __|_",
                   " |    |",
                   " X    1",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(false));
}

#[test]
fn marks_values_too_wide_for_a_deep_operator() {
    let mut tree = ExpressionTree::parse("+ + + + + 1 1 1 1 1 1");
    tree.eval();

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       + (6)",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   + (5)                                   1",
                   "          _________|_________",
                   "         |                   |",
                   "         + (4)               1",
                   "     ____|____",
                   "    |         |",
                   "    + (3)     1",
                   "  __|_",
                   " |    |",
                   " + X  1",
                   " |",
                   " X",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(false));
}

#[test]
fn marks_values_running_past_the_right_edge() {
    let mut tree = ExpressionTree::parse("+ 1 + 1 + 1 * 10 10");
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(true));
    tree.eval();

    assert_eq!(trimmed_rows(&tree),
               [
                   "",
                   "                                       + (103)",
                   "                    ___________________|___________________",
                   "                   |                                       |",
                   "                   1                                       + (102)",
                   "                                                  _________|_________",
                   "                                                 |                   |",
                   "                                                 1                   + (101)",
                   "                                                                 ____|____",
                   "                                                                |         |",
                   "                                                                1         * X",
                   "                                                                        __|_",
                   "                                                                       |    |",
                   "                                                                       10   10",
               ]);
    assert_eq!(tree.drawing().map(|drawing| drawing.complete), Some(false));
}

#[test]
fn display_prefixes_the_completeness_message_and_trims_the_end() {
    let tree = ExpressionTree::parse("1 1 +");
    let text = tree.to_string();

    assert!(text.starts_with("Tree drawn successfully.\n"));
    assert!(text.ends_with(&format!("1{}1", " ".repeat(39))));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn display_for_invalid_and_empty_trees() {
    assert_eq!(ExpressionTree::parse("23f").to_string(),
               "Invalid expression; can't draw a tree.");
    assert_eq!(ExpressionTree::parse("").to_string(),
               "Tree is empty; nothing to see here.");
    assert!(ExpressionTree::parse("").drawing().is_none());
}

#[test]
fn division_by_zero_invalidates_the_drawing() {
    let mut tree = ExpressionTree::parse("+ 1 / 2 0");
    assert!(tree.drawing().is_some());

    tree.eval();
    assert!(tree.drawing().is_none());
    assert_eq!(tree.to_string(), "Invalid expression; can't draw a tree.");
}

#[test]
fn stamping_clips_at_the_right_edge() {
    let mut canvas = Canvas::default();
    canvas.stamp(0, CANVAS_WIDTH - 2, "abcdef");
    canvas.stamp(CANVAS_ROWS, 0, "ignored");

    let lines = canvas.lines();
    assert_eq!(lines.len(), CANVAS_ROWS);
    assert!(lines[0].ends_with("ab"));
    assert_eq!(lines[0].chars().count(), CANVAS_WIDTH);
}
