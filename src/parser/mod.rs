use thiserror::Error;

pub mod parser;
pub mod printer;

pub use self::parser::{parse, parse_strict, Parser};
pub use self::printer::{print_tree, write_tree};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    PointerIncrement,
    PointerDecrement,

    ValueIncrement,
    ValueDecrement,

    Output,
    Input,

    Loop(Vec<AstNode>),

    // Parsed but not lowered yet, reserved for repeat counts/macros
    NumericLiteral(u8),
    CharacterLiteral(char),

    Return,
}

impl AstNode {
    /// Number of loops in this node, including itself and nested loops
    pub fn loop_count(&self) -> usize {
        count_loops(std::slice::from_ref(self))
    }
}

// Dropping a deep `Loop` chain recursively would overflow the stack,
// so nested bodies are flattened onto a heap stack first.
impl Drop for AstNode {
    fn drop(&mut self) {
        if let AstNode::Loop(children) = self {
            let mut stack = std::mem::take(children);
            while let Some(mut node) = stack.pop() {
                if let AstNode::Loop(children) = &mut node {
                    stack.append(children);
                }
            }
        }
    }
}

/// The top level of a program, or the body of a loop
pub type Forest = Vec<AstNode>;

pub fn count_loops(nodes: &[AstNode]) -> usize {
    let mut stack: Vec<&AstNode> = nodes.iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        if let AstNode::Loop(children) = node {
            count += 1;
            stack.extend(children);
        }
    }
    count
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token the tokenizer should never have let through
    #[error("internal invariant violated: unknown token `{token}`")]
    UnknownToken { token: char },

    #[error("Can't find other symbol ({other:}) for {symbol:} at token {position}")]
    Unbalanced {
        symbol: char,
        other: char,
        position: usize,
    },
}
