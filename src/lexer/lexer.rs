use super::Token;

/// Filters source text down to the command alphabet.
///
/// Lexing can't fail, anything that isn't a command or an identifier character
/// is treated as a comment and dropped.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            chars: chars.chars(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.chars.find_map(Token::from_char)
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
