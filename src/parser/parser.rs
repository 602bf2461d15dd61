use crate::lexer::Token;

use super::{AstNode, Forest, ParseError};

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,

    /// Reject unbalanced brackets rather than closing/truncating around them
    strict: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            pos: 0,
            strict: false,
        }
    }

    pub fn strict(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            strict: true,
            ..Parser::new(tokens)
        }
    }

    /// Parses the whole token stream.
    ///
    /// Open loops live on an explicit stack of `(position of '[', body so far)`
    /// frames so nesting depth is only bounded by memory.
    pub fn parse_program(&mut self) -> Result<Forest, ParseError> {
        let mut frames: Vec<(usize, Forest)> = vec![];
        let mut nodes: Forest = vec![];

        while let Some(token) = self.tokens.get(self.pos).copied() {
            let position = self.pos;
            self.pos += 1;

            let node = match token {
                Token::Increment => AstNode::PointerIncrement,
                Token::Decrement => AstNode::PointerDecrement,
                Token::DerefIncrement => AstNode::ValueIncrement,
                Token::DerefDecrement => AstNode::ValueDecrement,
                Token::Write => AstNode::Output,
                Token::Read => AstNode::Input,
                Token::JumpStart => {
                    frames.push((position, std::mem::take(&mut nodes)));
                    continue;
                }
                Token::JumpEnd => match frames.pop() {
                    Some((_, parent)) => AstNode::Loop(std::mem::replace(&mut nodes, parent)),
                    // a stray `]` at the top level just ends the program
                    None if self.strict => {
                        return Err(ParseError::Unbalanced {
                            symbol: ']',
                            other: '[',
                            position,
                        })
                    }
                    None => return Ok(nodes),
                },
                Token::Identifier(c) => match c.to_digit(10) {
                    Some(digit) => AstNode::NumericLiteral(digit as u8),
                    None if c.is_ascii_alphabetic() => AstNode::CharacterLiteral(c),
                    None => return Err(ParseError::UnknownToken { token: c }),
                },
            };
            nodes.push(node);
        }

        // ran out of tokens, unterminated `[`s close at the end of the program
        if let Some((position, _)) = frames.last() {
            if self.strict {
                return Err(ParseError::Unbalanced {
                    symbol: '[',
                    other: ']',
                    position: *position,
                });
            }
        }
        while let Some((_, parent)) = frames.pop() {
            let body = std::mem::replace(&mut nodes, parent);
            nodes.push(AstNode::Loop(body));
        }

        Ok(nodes)
    }
}

pub fn parse(tokens: &[Token]) -> Result<Forest, ParseError> {
    Parser::new(tokens).parse_program()
}

pub fn parse_strict(tokens: &[Token]) -> Result<Forest, ParseError> {
    Parser::strict(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::count_loops;

    fn parse_str(source: &str) -> Result<Forest, ParseError> {
        parse(&tokenize(source))
    }

    #[test]
    fn parses_leaves_in_order() {
        assert_eq!(
            parse_str("><+-.,").unwrap(),
            vec![
                AstNode::PointerIncrement,
                AstNode::PointerDecrement,
                AstNode::ValueIncrement,
                AstNode::ValueDecrement,
                AstNode::Output,
                AstNode::Input,
            ]
        );
    }

    #[test]
    fn parses_nested_loops() {
        assert_eq!(
            parse_str("+[>[-]<].").unwrap(),
            vec![
                AstNode::ValueIncrement,
                AstNode::Loop(vec![
                    AstNode::PointerIncrement,
                    AstNode::Loop(vec![AstNode::ValueDecrement]),
                    AstNode::PointerDecrement,
                ]),
                AstNode::Output,
            ]
        );
    }

    #[test]
    fn parses_literals() {
        assert_eq!(
            parse_str("7x").unwrap(),
            vec![AstNode::NumericLiteral(7), AstNode::CharacterLiteral('x')]
        );
    }

    #[test]
    fn underscore_is_an_invariant_violation() {
        assert_eq!(
            parse_str("+_+"),
            Err(ParseError::UnknownToken { token: '_' })
        );
        // also inside a loop, no partial tree comes back
        assert_eq!(
            parse_str("[+[_]]"),
            Err(ParseError::UnknownToken { token: '_' })
        );
    }

    #[test]
    fn stray_close_truncates_top_level() {
        assert_eq!(parse_str("]").unwrap(), vec![]);
        assert_eq!(parse_str("+]+++").unwrap(), vec![AstNode::ValueIncrement]);
    }

    #[test]
    fn unterminated_loop_closes_at_end() {
        assert_eq!(
            parse_str("[+[-").unwrap(),
            vec![AstNode::Loop(vec![
                AstNode::ValueIncrement,
                AstNode::Loop(vec![AstNode::ValueDecrement]),
            ])]
        );
    }

    #[test]
    fn strict_rejects_stray_close() {
        assert_eq!(
            parse_strict(&tokenize("+]")),
            Err(ParseError::Unbalanced {
                symbol: ']',
                other: '[',
                position: 1
            })
        );
    }

    #[test]
    fn strict_rejects_unterminated_open() {
        assert_eq!(
            parse_strict(&tokenize("[[-]")),
            Err(ParseError::Unbalanced {
                symbol: '[',
                other: ']',
                position: 0
            })
        );
    }

    #[test]
    fn strict_reports_innermost_unterminated_open() {
        assert_eq!(
            parse_strict(&tokenize("+[[")),
            Err(ParseError::Unbalanced {
                symbol: '[',
                other: ']',
                position: 2
            })
        );
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let depth = 200_000;
        let source = format!("{}.{}", "[".repeat(depth), "]".repeat(depth));
        let program = parse_strict(&tokenize(&source)).unwrap();
        assert_eq!(program.len(), 1);
        assert_eq!(count_loops(&program), depth);
    }

    #[test]
    fn strict_accepts_balanced() {
        let tokens = tokenize("[->+<]");
        assert_eq!(parse_strict(&tokens), parse(&tokens));
    }
}
