use std::io::{self, BufRead, Write};

use clap::Parser;
use exptree::report;

const PROMPT: &str = "Enter an expression (d for details or q to quit): ";

const DETAILS: &str = "\
Enter a mathematical expression in prefix, postfix, or infix notation.
The expression may only use integers from 0 to 2147483647
and the operations +, -, *, /, ^, or %. The division operator is integer division.

Prefix notation puts the operator before each pair of operands, as in
'+ 1 1', which evaluates to 2. A longer example is
+ * + * 8 7 4 5 * + 2 2 * 3 7         which evaluates to 384.
Please USE SPACES between operands and operators for prefix notation.

Postfix notation puts the operator after each pair of operands, as in
'1 1 +', which evaluates to 2. A longer example is
8 7 * 4 + 5 * 2 2 + 3 7 * * +         which evaluates to 384.
Please USE SPACES between operands and operators for postfix notation.

Infix notation puts the operator in between each pair of operands, as in
'1+1', which evaluates to 2. A longer example is
((((8*7)+4)*5)+((2+2)*(3*7)))         which evaluates to 384.
Parentheses may be used for infix notation, but aren't required.
Please DO NOT USE SPACES for infix notation.";

/// exptree builds a binary expression tree from a prefix, postfix or infix
/// expression, evaluates it, draws it and explains how to compute it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression. Its words are joined with single spaces. Without an
    /// expression, exptree asks for expressions interactively.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.expression.is_empty() {
        println!("\n{}", report(&args.expression.join(" ")));
        return;
    }

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("{PROMPT}");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write to the terminal: {e}");
            std::process::exit(1);
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        match line.as_str() {
            "d" => println!("\n{DETAILS}\n"),
            "q" => break,
            input => println!("\n{}\n", report(input)),
        }
    }
}
