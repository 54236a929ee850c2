use crate::{ast::ExprNode, util::num::OVERFLOW_SENTINEL};

/// Width of the canvas in columns.
pub const CANVAS_WIDTH: usize = 80;
/// Deepest level that is drawn; the root is level 0.
pub const MAX_DRAWN_DEPTH: usize = 4;
/// Three rows per drawn level plus the two rows of the depth marker.
pub const CANVAS_ROWS: usize = (MAX_DRAWN_DEPTH + 1) * 3 + 1;

const TRUNCATED: &str = "X";
const COMPLETE_MESSAGE: &str = "Tree drawn successfully.";
const INCOMPLETE_MESSAGE: &str = "Some parts of the tree don't fit in the drawing (indicated by Xs).";

/// A fixed grid of characters that text is stamped onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: [[char; CANVAS_WIDTH]; CANVAS_ROWS],
}

impl Default for Canvas {
    fn default() -> Self {
        Self { rows: [[' '; CANVAS_WIDTH]; CANVAS_ROWS] }
    }
}

impl Canvas {
    /// Writes `text` over `row` starting at `col`. Characters falling past
    /// the right edge are dropped.
    pub fn stamp(&mut self, row: usize, col: usize, text: &str) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        for (cell, ch) in cells.iter_mut().skip(col).zip(text.chars()) {
            *cell = ch;
        }
    }

    /// The canvas as one string per row.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

/// A rendered tree and whether everything fit on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    /// One entry per canvas row, each exactly [`CANVAS_WIDTH`] wide.
    pub rows:     Vec<String>,
    /// `false` when any label or subtree was replaced by an `X`.
    pub complete: bool,
}

impl std::fmt::Display for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = if self.complete { COMPLETE_MESSAGE } else { INCOMPLETE_MESSAGE };
        let text = format!("{message}\n{}", self.rows.join("\n"));
        write!(f, "{}", text.trim_end())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Draws a tree onto a fresh canvas.
///
/// Each level `d` gets a horizontal spread of `80 / 2^d` columns: a child
/// sits half a spread left or right of its parent. Labels that do not fit
/// their spread, and everything below [`MAX_DRAWN_DEPTH`], are replaced by
/// `X`. With `evaluated` set, operator labels are followed by their cached
/// value, or `(BIG)` for an overflowed node when `overflowed` is set.
///
/// # Example
/// ```
/// use exptree::interpreter::{drawing::render, parser::parse_prefix};
///
/// let tree = parse_prefix(["+", "1", "1"]).unwrap();
/// let drawing = render(&tree, false, false);
///
/// assert!(drawing.complete);
/// assert_eq!(drawing.rows[1].trim(), "+");
/// assert_eq!(drawing.rows[4].trim(), format!("1{}1", " ".repeat(39)));
/// ```
#[must_use]
pub fn render(root: &ExprNode, evaluated: bool, overflowed: bool) -> Drawing {
    let mut renderer = Renderer { canvas: Canvas::default(),
                                  evaluated,
                                  overflowed,
                                  complete: true };
    renderer.draw(root, 0, CANVAS_WIDTH / 2 - 1);

    Drawing { rows:     renderer.canvas.lines(),
              complete: renderer.complete, }
}

struct Renderer {
    canvas:     Canvas,
    evaluated:  bool,
    overflowed: bool,
    complete:   bool,
}

impl Renderer {
    fn draw(&mut self, node: &ExprNode, level: usize, col: usize) {
        let spread = CANVAS_WIDTH >> level;
        let row = level * 3 + 1;

        let label = node.label();
        if col + label.len() > CANVAS_WIDTH || label.len() > spread - 1 {
            self.truncate(row, col);
        } else {
            self.canvas.stamp(row, col, &label);
        }

        if let ExprNode::BinaryOp { left, right, value, .. } = node {
            if self.evaluated {
                let annotation = if self.overflowed && *value == OVERFLOW_SENTINEL {
                    "(BIG)".to_string()
                } else {
                    format!("({value})")
                };
                if col + annotation.len() > CANVAS_WIDTH - 2 || annotation.len() > spread - 3 {
                    self.truncate(row, col + 2);
                } else {
                    self.canvas.stamp(row, col + 2, &annotation);
                }
            }

            self.draw_child(left, level + 1, col, Side::Left);
            self.draw_child(right, level + 1, col, Side::Right);
        }
    }

    fn draw_child(&mut self, node: &ExprNode, level: usize, parent_col: usize, side: Side) {
        if level > MAX_DRAWN_DEPTH {
            self.canvas.stamp(CANVAS_ROWS - 2, parent_col, "|");
            self.truncate(CANVAS_ROWS - 1, parent_col);
            return;
        }

        let spread = CANVAS_WIDTH >> level;
        let col = match side {
            Side::Left => parent_col.saturating_sub(spread.div_ceil(2)),
            Side::Right => parent_col + spread / 2,
        };

        if side == Side::Left {
            self.canvas.stamp(level * 3 - 1, col + 1, &"_".repeat(spread - 1));
            self.canvas.stamp(level * 3 - 1, parent_col, "|");
        }
        self.canvas.stamp(level * 3, col, "|");

        self.draw(node, level, col);
    }

    fn truncate(&mut self, row: usize, col: usize) {
        self.canvas.stamp(row, col, TRUNCATED);
        self.complete = false;
    }
}
