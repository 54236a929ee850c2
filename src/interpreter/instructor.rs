use crate::ast::{BinaryOperator, ExprNode};

/// Describes, step by step, how to evaluate an already evaluated tree.
///
/// Operations are narrated in post-order, one sentence each, using the
/// values cached on the nodes. Inner steps are numbered "First" to "Tenth"
/// and then alternate randomly between "Next" and "Then"; the root's step
/// opens with "All you have to do is", "Then," or "Finally," depending on
/// how many steps precede it.
///
/// # Example
/// ```
/// use exptree::interpreter::{evaluator::Evaluator, instructor::instruct, parser::parse_prefix};
///
/// let mut tree = parse_prefix(["*", "+", "1", "2", "3"]).unwrap();
/// Evaluator::new(false).eval(&mut tree);
///
/// assert_eq!(instruct(&tree),
///            "First, add the value 1 and the value 2 to get 3. Then, multiply the addition \
///             result 3 and the value 3 to get 9. The final result is 9.");
/// ```
#[must_use]
pub fn instruct(root: &ExprNode) -> String {
    if root.is_leaf() {
        let value = root.value();
        return format!("Take {value} and do nothing to it; you get {value}.");
    }

    let mut steps = Vec::with_capacity(root.operation_count());
    narrate(root, true, &mut steps);

    format!("{} The final result is {}.", steps.join(" "), root.value())
}

fn narrate(node: &ExprNode, is_root: bool, steps: &mut Vec<String>) {
    let ExprNode::BinaryOp { op,
                             left,
                             right,
                             value, } = node
    else {
        return;
    };

    narrate(left, false, steps);
    narrate(right, false, steps);

    let lead = if is_root {
        match steps.len() {
            0 => "All you have to do is ".to_string(),
            1 => "Then, ".to_string(),
            _ => "Finally, ".to_string(),
        }
    } else {
        format!("{}, ", ordinal(steps.len() + 1))
    };

    steps.push(format!("{lead}{} to get {value}.", operation(*op, left, right)));
}

fn operation(op: BinaryOperator, left: &ExprNode, right: &ExprNode) -> String {
    let a = operand(left);
    let b = operand(right);

    match op {
        BinaryOperator::Add => format!("add {a} and {b}"),
        BinaryOperator::Sub => format!("subtract {b} from {a}"),
        BinaryOperator::Mul => format!("multiply {a} and {b}"),
        BinaryOperator::Div => format!("divide {a} by {b}"),
        BinaryOperator::Pow => format!("raise {a} to the power of {b}"),
        BinaryOperator::Mod => format!("take {a} modulo {b}"),
    }
}

fn operand(node: &ExprNode) -> String {
    format!("the {} {}", node.noun(), node.value())
}

fn ordinal(step: usize) -> &'static str {
    match step {
        1 => "First",
        2 => "Second",
        3 => "Third",
        4 => "Fourth",
        5 => "Fifth",
        6 => "Sixth",
        7 => "Seventh",
        8 => "Eighth",
        9 => "Ninth",
        10 => "Tenth",
        _ if rand::random() => "Next",
        _ => "Then",
    }
}
