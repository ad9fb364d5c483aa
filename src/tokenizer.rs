#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    /// Text of the token
    pub text: &'a str,
    /// Byte offset of the token in the original text. End is defined by length of text.
    pub start: usize,
}

/// Splits text on runs of whitespace, yielding the non-whitespace tokens.
#[derive(Debug)]
pub struct TokenParser<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> TokenParser<'a> {
    pub fn parse(text: &'a str) -> TokenParser<'a> {
        TokenParser {
            source: text,
            position: 0,
        }
    }
}

fn run_length(text: &str, whitespace: bool) -> usize {
    text.chars()
        .take_while(|c| c.is_whitespace() == whitespace)
        .map(|c| c.len_utf8())
        .sum()
}

impl<'a> Iterator for TokenParser<'a> {
    type Item = Token<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let rest_of_text = self.source.get(self.position..)?;
        self.position += run_length(rest_of_text, true);
        let rest_of_text = self.source.get(self.position..)?;
        let len = run_length(rest_of_text, false);
        if len == 0 {
            return None;
        }
        let start = self.position;
        self.position += len;
        Some(Token {
            text: self.source.get(start..self.position)?,
            start,
        })
    }
}

/// Token texts of `text`, in order.
pub fn tokenize(text: &str) -> Vec<&str> {
    TokenParser::parse(text).map(|t| t.text).collect()
}
