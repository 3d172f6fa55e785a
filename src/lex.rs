use std::fmt::Display;

/// One whitespace-delimited word of an input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'de> {
    pub literal: &'de str,
    /// Byte offset of the word within the line.
    pub offset: usize,
}

impl Word<'_> {
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.literal.len()
    }
}

impl Display for Word<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

pub struct Lexer<'de> {
    rest: &'de str,
    pub byte: usize,
}

impl<'de> Lexer<'de> {
    pub fn new(input: &'de str) -> Self {
        Lexer {
            rest: input,
            byte: 0,
        }
    }
}

impl<'de> Iterator for Lexer<'de> {
    type Item = Word<'de>;

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start();
        self.byte += self.rest.len() - trimmed.len();
        self.rest = trimmed;
        if self.rest.is_empty() {
            return None;
        }

        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let word = Word {
            literal: &self.rest[..end],
            offset: self.byte,
        };
        self.byte += end;
        self.rest = &self.rest[end..];
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literals(input: &str) -> Vec<&str> {
        Lexer::new(input).map(|word| word.literal).collect()
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(literals("-fib 5  -fac\t7 "), vec!["-fib", "5", "-fac", "7"]);
        assert!(literals("   ").is_empty());
        assert!(literals("").is_empty());
    }

    #[test]
    fn tracks_byte_offsets() {
        let words: Vec<_> = Lexer::new("  -e  12").collect();
        assert_eq!(words[0].span(), 2..4);
        assert_eq!(words[1].span(), 6..8);
        assert_eq!(words[1].to_string(), "12");
    }
}
