use logos::Logos;

use crate::{
    error::LexError,
    interpreter::lexer::{
        indent::IndentTracker,
        token::{LexerExtras, Token, TokenKind},
    },
};

/// The default number of spaces a tab contributes to indentation.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Converts source text into a token stream.
///
/// The lexer runs the raw scanner over the input and layers line structure
/// on top of it: every physical newline yields a `NEWLINE` token, changes in
/// indentation yield `INDENT`/`DEDENT` pairs, and the stream always ends
/// with enough `DEDENT`s to close open blocks followed by `EOF`.
///
/// Lines that contain only whitespace produce no indentation tokens. A line
/// whose first token begins with one of `+ - * / = , .` is a continuation of
/// the previous line: the preceding `NEWLINE` and the line's indentation
/// tokens are suppressed so multi-line expressions parse as one statement.
///
/// # Example
/// ```
/// use dakota::interpreter::lexer::{Lexer, TokenKind};
///
/// let tokens = Lexer::new().tokenize("x = 1\n").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![&TokenKind::Identifier("x".to_string()),
///                 &TokenKind::Assign,
///                 &TokenKind::Integer(1),
///                 &TokenKind::Newline,
///                 &TokenKind::Eof]);
/// ```
#[derive(Debug)]
pub struct Lexer {
    tab_size:          usize,
    preserve_comments: bool,
}

/// The pending start of a logical line: the newline that ended the previous
/// line (absent for the first line of the file) and the indentation run that
/// followed it.
struct LineStart {
    newline: Option<Token>,
    run:     String,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Creates a lexer with a tab size of four and comments stripped.
    #[must_use]
    pub const fn new() -> Self {
        Self { tab_size:          DEFAULT_TAB_SIZE,
               preserve_comments: false, }
    }

    /// Sets how many spaces a tab contributes to the indentation counter.
    /// Values below one are clamped to one.
    #[must_use]
    pub const fn tab_size(mut self, width: usize) -> Self {
        self.tab_size = if width == 0 { 1 } else { width };
        self
    }

    /// Keeps comment tokens in the output stream instead of stripping them.
    #[must_use]
    pub const fn preserve_comments(mut self, keep: bool) -> Self {
        self.preserve_comments = keep;
        self
    }

    /// Tokenizes `source` into a complete token stream.
    ///
    /// # Errors
    /// Returns a [`LexError`] with position information for malformed
    /// indentation, unterminated strings, or characters that are not part of
    /// the language. Lexing stops at the first error.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut tracker = IndentTracker::new(self.tab_size);
        let mut raw = TokenKind::lexer_with_extras(source,
                                                   LexerExtras { line:       1,
                                                                 line_start: 0, });

        // The indentation of the first line is not covered by any newline
        // token, so it is measured directly from the source prefix.
        let first_run: String = source.chars().take_while(|c| matches!(c, ' ' | '\t')).collect();
        let mut line_start = Some(LineStart { newline: None,
                                              run:     first_run, });

        loop {
            let line_before = raw.extras.line;
            let column_base = raw.extras.line_start;
            let Some(result) = raw.next() else { break };

            let span = raw.span();
            let column = span.start - column_base + 1;

            let kind = match result {
                Ok(kind) => kind,
                Err(()) => {
                    let slice = raw.slice();
                    if slice.starts_with('"') {
                        return Err(LexError::UnterminatedString { line: line_before,
                                                                  column });
                    }
                    return Err(LexError::UnknownCharacter { character: slice.chars()
                                                                            .next()
                                                                            .unwrap_or('\0'),
                                                            line: line_before,
                                                            column });
                },
            };

            if matches!(kind, TokenKind::Newline) {
                if let Some(previous) = line_start.take() {
                    // The line that just ended was blank. It produces no
                    // indentation tokens, but the newline that terminated
                    // the line before it is still due.
                    if let Some(token) = previous.newline {
                        tokens.push(token);
                    }
                }
                line_start = Some(LineStart { newline: Some(Token { kind: TokenKind::Newline,
                                                                    line: line_before,
                                                                    column }),
                                              run:     raw.slice()[1..].to_string(), });
                continue;
            }

            let token = Token { kind,
                                line: line_before,
                                column };

            if let Some(start) = line_start.take()
               && !token.kind.continues_line()
            {
                if let Some(newline) = start.newline {
                    tokens.push(newline);
                }

                let delta = tracker.advance(&start.run, token.line)?;
                for _ in 0..delta.indents {
                    tokens.push(Token { kind:   TokenKind::Indent,
                                        line:   token.line,
                                        column: 1, });
                }
                for _ in 0..delta.dedents {
                    tokens.push(Token { kind:   TokenKind::Dedent,
                                        line:   token.line,
                                        column: 1, });
                }
            }

            if matches!(token.kind, TokenKind::Comment(_)) && !self.preserve_comments {
                continue;
            }

            tokens.push(token);
        }

        // A trailing newline still terminates the last statement.
        if let Some(start) = line_start
           && let Some(newline) = start.newline
        {
            tokens.push(newline);
        }

        let line = raw.extras.line;
        let column = source.len().saturating_sub(raw.extras.line_start) + 1;

        for _ in 0..tracker.close() {
            tokens.push(Token { kind: TokenKind::Dedent,
                                line,
                                column: 1 });
        }
        tokens.push(Token { kind: TokenKind::Eof,
                            line,
                            column });

        Ok(tokens)
    }
}
