use logos::Logos;

/// Represents a lexical token kind in Dakota source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Most variants are recognized directly by the scanner; `Indent`, `Dedent`
/// and `Eof` are synthesized by the driver from line structure and never
/// match source text themselves.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Float literal tokens, such as `3.14` or `2.5e-3`. Digits are required
    /// on both sides of the decimal point.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, with C-style escapes decoded.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `mult`, the matrix-multiplication operator.
    #[token("mult")]
    MatMul,
    /// Identifier tokens; variable or function names such as `x` or `rotate`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `\ comments`, running to the end of the line.
    #[regex(r"\\[^\n]*", parse_comment)]
    Comment(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    Power,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`, the matrix row separator.
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// End of a logical line. The scanner consumes the following
    /// indentation run together with the newline so the driver can measure
    /// it in one slice.
    #[regex(r"\n[ \t]*", newline_callback)]
    Newline,
    /// Block opening, synthesized by the driver.
    Indent,
    /// Block closing, synthesized by the driver.
    Dedent,
    /// End of input, synthesized by the driver.
    Eof,
}

impl TokenKind {
    /// Produces a short human-readable description for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Float(value) => format!("float literal '{value}'"),
            Self::Integer(value) => format!("integer literal '{value}'"),
            Self::Str(_) => "string literal".to_string(),
            Self::Bool(value) => format!("'{value}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Comment(_) => "comment".to_string(),
            Self::If => "'if'".to_string(),
            Self::Else => "'else'".to_string(),
            Self::Elif => "'elif'".to_string(),
            Self::While => "'while'".to_string(),
            Self::For => "'for'".to_string(),
            Self::In => "'in'".to_string(),
            Self::Function => "'function'".to_string(),
            Self::Return => "'return'".to_string(),
            Self::And => "'and'".to_string(),
            Self::Or => "'or'".to_string(),
            Self::Not => "'not'".to_string(),
            Self::MatMul => "'mult'".to_string(),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Power => "'**'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Percent => "'%'".to_string(),
            Self::Assign => "'='".to_string(),
            Self::Equal => "'=='".to_string(),
            Self::NotEqual => "'!='".to_string(),
            Self::LessEqual => "'<='".to_string(),
            Self::Less => "'<'".to_string(),
            Self::GreaterEqual => "'>='".to_string(),
            Self::Greater => "'>'".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
            Self::LBrace => "'{'".to_string(),
            Self::RBrace => "'}'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Dot => "'.'".to_string(),
            Self::Newline => "end of line".to_string(),
            Self::Indent => "indentation".to_string(),
            Self::Dedent => "dedentation".to_string(),
            Self::Eof => "end of input".to_string(),
        }
    }

    /// Returns `true` for token kinds whose lexeme begins with one of the
    /// line-continuation characters `+ - * / = , .`.
    ///
    /// A line whose first token is one of these continues the previous line:
    /// neither a `NEWLINE` nor any indentation tokens are emitted for it.
    #[must_use]
    pub const fn continues_line(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Power
                 | Self::Slash
                 | Self::Assign
                 | Self::Equal
                 | Self::Comma
                 | Self::Dot)
    }
}

/// A token together with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind and any decoded literal value.
    pub kind:   TokenKind,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column.
    pub column: usize,
}

/// Additional information carried by the scanner during tokenization.
///
/// Tracks the current line number and the byte offset of the current line's
/// first character, from which token columns are derived.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &mut logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &mut logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Decodes a string literal, resolving escape sequences.
///
/// `\n`, `\t`, `\r`, `\\` and `\"` decode to their usual characters; any
/// other escaped character yields that character literally. Interior
/// newlines are counted so position tracking stays accurate.
fn parse_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();

    if let Some(last_newline) = slice.rfind('\n') {
        lex.extras.line += slice.matches('\n').count();
        lex.extras.line_start = lex.span().start + last_newline + 1;
    }

    decode_escapes(&slice[1..slice.len() - 1])
}

/// Extracts the comment text following the `\` sigil.
fn parse_comment(lex: &mut logos::Lexer<TokenKind>) -> String {
    lex.slice()[1..].to_string()
}

/// Advances the line counter past a newline and records where the new line
/// begins. The trailing indentation run stays part of the slice for the
/// driver to measure.
fn newline_callback(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().start + 1;
}

fn decode_escapes(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some(other) => decoded.push(other),
            None => decoded.push('\\'),
        }
    }

    decoded
}
