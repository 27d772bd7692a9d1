use crate::{
    ast::{Ast, BinaryOpKind, NIL, NodeKind, UnaryOpKind},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Index of the program root node in the arena.
pub const ROOT: u32 = 0;

/// Builds a flat syntax tree from a token stream.
///
/// The parser owns the arena it is filling and keeps a cursor into the
/// borrowed token slice. Expressions are parsed by precedence climbing;
/// statements and blocks by recursive descent. On a parse error the parser
/// records the message and synchronizes to the next statement boundary, so
/// a single run can report several errors.
///
/// # Example
/// ```
/// use dakota::interpreter::{lexer::Lexer, parser::Parser};
///
/// let tokens = Lexer::new().tokenize("x = 1 + 2\n").unwrap();
/// let ast = Parser::new(&tokens).parse().unwrap();
///
/// assert!(ast.node_count() > 1);
/// ```
pub struct Parser<'t> {
    pub(crate) tokens:   &'t [Token],
    pub(crate) position: usize,
    pub(crate) ast:      Ast,
    pub(crate) errors:   Vec<ParseError>,
}

impl<'t> Parser<'t> {
    /// Creates a parser over `tokens`.
    ///
    /// The stream is expected to end with an `EOF` token, as produced by the
    /// lexer.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let mut parser = Self { tokens,
                                position: 0,
                                ast: Ast::new(),
                                errors: Vec::new() };
        parser.skip_comments();
        parser
    }

    /// Parses the whole token stream into a program.
    ///
    /// # Errors
    /// Returns every recorded [`ParseError`] when at least one statement
    /// failed to parse.
    pub fn parse(mut self) -> Result<Ast, Vec<ParseError>> {
        while !self.at_end() {
            if self.eat(&TokenKind::Newline) {
                continue;
            }

            let before = self.position;
            match self.parse_statement() {
                Ok(statement) => self.ast.add_child(ROOT, statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                    if self.position == before && !self.at_end() {
                        self.advance();
                    }
                },
            }
        }

        if self.errors.is_empty() {
            Ok(self.ast)
        } else {
            Err(self.errors)
        }
    }

    // Token cursor -------------------------------------------------------

    pub(crate) fn current(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    pub(crate) fn kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.tokens.is_empty() || matches!(self.kind(), TokenKind::Eof)
    }

    pub(crate) fn token_index(&self) -> u32 {
        u32::try_from(self.position).unwrap_or(0)
    }

    pub(crate) fn advance(&mut self) {
        if !self.at_end() {
            self.position += 1;
        }
        self.skip_comments();
    }

    /// Comment tokens are trivia to the grammar; the cursor never rests on
    /// one.
    fn skip_comments(&mut self) {
        while !self.tokens.is_empty() && matches!(self.kind(), TokenKind::Comment(_)) {
            self.position += 1;
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the current token when it matches `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes the current token or records what was expected instead.
    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &str) -> ParseResult<()> {
        if self.eat(kind) {
            return Ok(());
        }
        Err(self.expected_error(expected))
    }

    pub(crate) fn expected_error(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError::ExpectedToken { expected: expected.to_string(),
                                    found:    token.kind.describe(),
                                    line:     token.line,
                                    column:   token.column, }
    }

    /// Skips ahead to the next statement boundary after an error: just past
    /// the next newline, or to the next statement-introducing keyword.
    pub(crate) fn synchronize(&mut self) {
        while !self.at_end() {
            if self.eat(&TokenKind::Newline) {
                return;
            }

            if matches!(self.kind(),
                        TokenKind::If
                        | TokenKind::While
                        | TokenKind::For
                        | TokenKind::Function
                        | TokenKind::Return)
            {
                return;
            }

            self.advance();
        }
    }

    // Expressions --------------------------------------------------------

    /// Parses a full expression, starting at the loosest precedence level.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<u32> {
        self.parse_binary_expression(1)
    }

    /// Precedence-climbing loop for binary operators.
    ///
    /// Left-associative operators recurse with `precedence + 1`;
    /// right-associative ones (only `**`) recurse with their own
    /// precedence.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> ParseResult<u32> {
        let mut left = self.parse_unary_expression()?;

        while let Some(op) = binary_op(self.kind()) {
            let precedence = op_precedence(op);
            if precedence < min_precedence {
                break;
            }

            let token = self.token_index();
            self.advance();

            let next_min = if right_associative(op) {
                precedence
            } else {
                precedence + 1
            };
            let right = self.parse_binary_expression(next_min)?;

            let node = self.ast.push(NodeKind::BinaryOp { op, left, right }, token);
            self.ast.add_child(node, left);
            self.ast.add_child(node, right);
            left = node;
        }

        Ok(left)
    }

    /// Parses unary `-` and `not`, which bind tighter than any binary
    /// operator and recurse into themselves.
    fn parse_unary_expression(&mut self) -> ParseResult<u32> {
        let op = match self.kind() {
            TokenKind::Minus => Some(UnaryOpKind::Negate),
            TokenKind::Not => Some(UnaryOpKind::Not),
            _ => None,
        };

        let Some(op) = op else {
            return self.parse_primary();
        };

        let token = self.token_index();
        self.advance();

        let operand = self.parse_unary_expression()?;
        let node = self.ast.push(NodeKind::UnaryOp { op, operand }, token);
        self.ast.add_child(node, operand);
        Ok(node)
    }

    /// Parses a primary expression and any chained postfix accesses.
    fn parse_primary(&mut self) -> ParseResult<u32> {
        let token = self.token_index();

        let node = match self.kind().clone() {
            TokenKind::Integer(value) => {
                self.advance();
                self.ast.push(NodeKind::IntegerLiteral(value), token)
            },
            TokenKind::Float(value) => {
                self.advance();
                self.ast.push(NodeKind::FloatLiteral(value), token)
            },
            TokenKind::Str(text) => {
                self.advance();
                let string = self.ast.strings.intern(&text);
                self.ast.push(NodeKind::StringLiteral { string }, token)
            },
            TokenKind::Bool(value) => {
                self.advance();
                self.ast.push(NodeKind::BooleanLiteral(value), token)
            },
            TokenKind::LBracket => self.parse_matrix_literal()?,
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen, "')' after expression")?;
                inner
            },
            TokenKind::Identifier(name) => {
                self.advance();
                if self.check(&TokenKind::LParen) {
                    self.parse_function_call(&name, token)?
                } else {
                    let interned = self.ast.strings.intern(&name);
                    self.ast.push(NodeKind::Identifier { name: interned }, token)
                }
            },
            other => {
                let current = self.current();
                return Err(ParseError::ExpectedExpression { found:  other.describe(),
                                                            line:   current.line,
                                                            column: current.column, });
            },
        };

        self.parse_postfix(node)
    }

    /// Parses `name(args)` with the callee name already consumed.
    fn parse_function_call(&mut self, name: &str, token: u32) -> ParseResult<u32> {
        self.advance(); // consume '('

        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, "')' after function arguments")?;

        let interned = self.ast.strings.intern(name);
        let node = self.ast.push(NodeKind::FunctionCall { name:      interned,
                                                          args:      args.first()
                                                                         .copied()
                                                                         .unwrap_or(NIL),
                                                          arg_count: u32::try_from(args.len()).unwrap_or(0), },
                                 token);
        for arg in args {
            self.ast.add_child(node, arg);
        }

        Ok(node)
    }

    /// Parses chained `[index]` and `.name` accesses, which bind tightest.
    fn parse_postfix(&mut self, mut node: u32) -> ParseResult<u32> {
        loop {
            if self.check(&TokenKind::LBracket) {
                let token = self.token_index();
                self.advance();

                let index = self.parse_expression()?;
                self.expect(&TokenKind::RBracket, "']' after index")?;

                let access = self.ast.push(NodeKind::ArrayAccess { object: node,
                                                                   index },
                                           token);
                self.ast.add_child(access, node);
                self.ast.add_child(access, index);
                node = access;
            } else if self.check(&TokenKind::Dot) {
                let token = self.token_index();
                self.advance();

                let TokenKind::Identifier(member) = self.kind().clone() else {
                    return Err(self.expected_error("member name after '.'"));
                };
                self.advance();

                let interned = self.ast.strings.intern(&member);
                let access = self.ast.push(NodeKind::MemberAccess { object: node,
                                                                    member: interned },
                                           token);
                self.ast.add_child(access, node);
                node = access;
            } else {
                return Ok(node);
            }
        }
    }
}

/// Maps a token to its binary operator, when it is one.
pub(crate) const fn binary_op(kind: &TokenKind) -> Option<BinaryOpKind> {
    match kind {
        TokenKind::Plus => Some(BinaryOpKind::Add),
        TokenKind::Minus => Some(BinaryOpKind::Sub),
        TokenKind::Star => Some(BinaryOpKind::Mul),
        TokenKind::Slash => Some(BinaryOpKind::Div),
        TokenKind::Power => Some(BinaryOpKind::Pow),
        TokenKind::Percent => Some(BinaryOpKind::Mod),
        TokenKind::MatMul => Some(BinaryOpKind::MatMul),
        TokenKind::Equal => Some(BinaryOpKind::Eq),
        TokenKind::NotEqual => Some(BinaryOpKind::Ne),
        TokenKind::Less => Some(BinaryOpKind::Lt),
        TokenKind::LessEqual => Some(BinaryOpKind::Le),
        TokenKind::Greater => Some(BinaryOpKind::Gt),
        TokenKind::GreaterEqual => Some(BinaryOpKind::Ge),
        TokenKind::And => Some(BinaryOpKind::And),
        TokenKind::Or => Some(BinaryOpKind::Or),
        _ => None,
    }
}

/// Binding strength of a binary operator; higher binds tighter.
pub(crate) const fn op_precedence(op: BinaryOpKind) -> u8 {
    match op {
        BinaryOpKind::Or => 1,
        BinaryOpKind::And => 2,
        BinaryOpKind::Eq | BinaryOpKind::Ne => 3,
        BinaryOpKind::Lt | BinaryOpKind::Le | BinaryOpKind::Gt | BinaryOpKind::Ge => 4,
        BinaryOpKind::Add | BinaryOpKind::Sub => 5,
        BinaryOpKind::Mul | BinaryOpKind::Div | BinaryOpKind::MatMul | BinaryOpKind::Mod => 6,
        BinaryOpKind::Pow => 7,
    }
}

/// Only exponentiation associates to the right.
pub(crate) const fn right_associative(op: BinaryOpKind) -> bool {
    matches!(op, BinaryOpKind::Pow)
}
