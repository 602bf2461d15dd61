use std::fmt;

pub mod lexer;

pub use self::lexer::{tokenize, Lexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // `>`: Increment the `data pointer` by one
    Increment,
    // `<`: Decrement the `data pointer` by one
    Decrement,

    // `+`: Increment the byte at the `data pointer` by one
    DerefIncrement,
    // `-`: Decrement the byte at the `data pointer` by one
    DerefDecrement,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write,
    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Read,

    // `[`: Start of a loop that runs while the byte at the `data pointer` is non-zero
    JumpStart,
    // `]`: End of the innermost open loop
    JumpEnd,

    // Letters, digits and `_` are kept for a future macro/repeat syntax
    Identifier(char),
}

impl Token {
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '>' => Some(Token::Increment),
            '<' => Some(Token::Decrement),
            '+' => Some(Token::DerefIncrement),
            '-' => Some(Token::DerefDecrement),
            '.' => Some(Token::Write),
            ',' => Some(Token::Read),
            '[' => Some(Token::JumpStart),
            ']' => Some(Token::JumpEnd),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(Token::Identifier(c)),
            // everything else is a comment
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Token::Increment => '>',
            Token::Decrement => '<',
            Token::DerefIncrement => '+',
            Token::DerefDecrement => '-',
            Token::Write => '.',
            Token::Read => ',',
            Token::JumpStart => '[',
            Token::JumpEnd => ']',
            Token::Identifier(c) => *c,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
