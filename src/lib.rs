//! Compiles Brainf**k source into textual LLVM IR.
//!
//! The pipeline only ever runs forwards: [`tokenize`] filters the source down to
//! command tokens, [`parse`] builds the [`AstNode`] forest and [`generate`] lowers
//! that forest into one IR module.

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use codegen::generate;
pub use error::{Error, Result};
pub use lexer::{tokenize, Token};
pub use output::write_ir;
pub use parser::{parse, parse_strict, print_tree, AstNode, Forest, ParseError};

/// Tokenize, parse and generate in one go.
///
/// Unbalanced brackets are tolerated, see [`compile_strict`] to reject them.
pub fn compile(source: &str) -> std::result::Result<String, ParseError> {
    let program = parse(&tokenize(source))?;
    Ok(generate(&program))
}

/// Like [`compile`], but an unmatched `[` or `]` is a [`ParseError::Unbalanced`].
pub fn compile_strict(source: &str) -> std::result::Result<String, ParseError> {
    let program = parse_strict(&tokenize(source))?;
    Ok(generate(&program))
}
