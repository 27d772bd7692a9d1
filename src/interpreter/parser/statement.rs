use crate::{
    ast::{NIL, NodeKind},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a function definition,
    /// - an `if`, `while` or `for` statement,
    /// - a `return` statement,
    /// - an assignment (`IDENT = expr`),
    /// - an expression used as a statement.
    ///
    /// # Returns
    /// The arena index of the parsed statement node. The caller attaches it
    /// to the enclosing program or block.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<u32> {
        while self.eat(&TokenKind::Newline) {}

        if self.at_end() {
            let token = self.current();
            return Err(ParseError::UnexpectedEndOfInput { line:   token.line,
                                                          column: token.column, });
        }

        match self.kind() {
            TokenKind::Function => self.parse_function_definition(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Identifier(_) if self.next_is_assign() => self.parse_assignment(),
            // Block structure and clause keywords can never begin a
            // statement; a dangling `else` or stray indentation lands here.
            TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::Else
            | TokenKind::Elif
            | TokenKind::In
            | TokenKind::Colon => {
                let token = self.current();
                Err(ParseError::UnexpectedToken { found:  token.kind.describe(),
                                                  line:   token.line,
                                                  column: token.column, })
            },
            _ => self.parse_expression_statement(),
        }
    }

    /// Looks one token ahead for `=`, skipping trivia, to distinguish an
    /// assignment from an expression beginning with an identifier.
    fn next_is_assign(&self) -> bool {
        let mut ahead = self.position + 1;
        while let Some(token) = self.tokens.get(ahead) {
            match token.kind {
                TokenKind::Comment(_) => ahead += 1,
                TokenKind::Assign => return true,
                _ => return false,
            }
        }
        false
    }

    /// Parses `IDENT = expression`.
    fn parse_assignment(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        let TokenKind::Identifier(name) = self.kind().clone() else {
            return Err(self.expected_error("identifier in assignment"));
        };
        self.advance();

        let interned = self.ast.strings.intern(&name);
        let target = self.ast.push(NodeKind::Identifier { name: interned }, token);

        self.expect(&TokenKind::Assign, "'=' in assignment")?;

        let value = self.parse_expression()?;

        let node = self.ast.push(NodeKind::Assignment { target, value }, token);
        self.ast.add_child(node, target);
        self.ast.add_child(node, value);
        Ok(node)
    }

    /// Parses `if condition:` with optional `elif` chains and a final
    /// `else:`. An `elif` parses as a nested if-statement in the else slot.
    fn parse_if_statement(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume 'if' or 'elif'

        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Colon, "':' after if condition")?;
        let then_block = self.parse_block()?;

        let else_block = if self.check(&TokenKind::Elif) {
            self.parse_if_statement()?
        } else if self.eat(&TokenKind::Else) {
            self.expect(&TokenKind::Colon, "':' after else")?;
            self.parse_block()?
        } else {
            NIL
        };

        let node = self.ast.push(NodeKind::If { condition,
                                                then_block,
                                                else_block },
                                 token);
        self.ast.add_child(node, condition);
        self.ast.add_child(node, then_block);
        if else_block != NIL {
            self.ast.add_child(node, else_block);
        }
        Ok(node)
    }

    /// Parses `while condition:` followed by a block.
    fn parse_while_statement(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume 'while'

        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Colon, "':' after while condition")?;
        let body = self.parse_block()?;

        let node = self.ast.push(NodeKind::While { condition, body }, token);
        self.ast.add_child(node, condition);
        self.ast.add_child(node, body);
        Ok(node)
    }

    /// Parses `for IDENT in expression:` followed by a block.
    fn parse_for_statement(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume 'for'

        let variable_token = self.token_index();
        let TokenKind::Identifier(name) = self.kind().clone() else {
            return Err(self.expected_error("loop variable after 'for'"));
        };
        self.advance();

        let interned = self.ast.strings.intern(&name);
        let variable = self.ast
                           .push(NodeKind::Identifier { name: interned }, variable_token);

        self.expect(&TokenKind::In, "'in' after loop variable")?;

        let iterable = self.parse_expression()?;
        self.expect(&TokenKind::Colon, "':' after for iterable")?;
        let body = self.parse_block()?;

        let node = self.ast.push(NodeKind::For { variable,
                                                 iterable,
                                                 body },
                                 token);
        self.ast.add_child(node, variable);
        self.ast.add_child(node, iterable);
        self.ast.add_child(node, body);
        Ok(node)
    }

    /// Parses `function IDENT(params):` followed by a block. Parameters are
    /// zero or more identifiers separated by commas.
    fn parse_function_definition(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume 'function'

        let TokenKind::Identifier(name) = self.kind().clone() else {
            return Err(self.expected_error("function name"));
        };
        self.advance();

        self.expect(&TokenKind::LParen, "'(' after function name")?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let param_token = self.token_index();
                let TokenKind::Identifier(param) = self.kind().clone() else {
                    return Err(self.expected_error("parameter name"));
                };
                self.advance();

                let interned = self.ast.strings.intern(&param);
                params.push(self.ast
                                .push(NodeKind::Identifier { name: interned }, param_token));

                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RParen, "')' after parameters")?;
        self.expect(&TokenKind::Colon, "':' after function signature")?;

        let body = self.parse_block()?;

        let interned = self.ast.strings.intern(&name);
        let node = self.ast.push(NodeKind::FunctionDef { name:        interned,
                                                         params:      params.first()
                                                                            .copied()
                                                                            .unwrap_or(NIL),
                                                         param_count:
                                                             u32::try_from(params.len()).unwrap_or(0),
                                                         body, },
                                 token);
        for param in params {
            self.ast.add_child(node, param);
        }
        self.ast.add_child(node, body);
        Ok(node)
    }

    /// Parses `return` with an optional value expression. The value is
    /// absent when the line ends immediately.
    fn parse_return_statement(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume 'return'

        let value = if self.check(&TokenKind::Newline)
                       || self.check(&TokenKind::Dedent)
                       || self.at_end()
        {
            NIL
        } else {
            self.parse_expression()?
        };

        let node = self.ast.push(NodeKind::Return { value }, token);
        if value != NIL {
            self.ast.add_child(node, value);
        }
        Ok(node)
    }

    /// Wraps a bare expression in an expression-statement node.
    fn parse_expression_statement(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        let expression = self.parse_expression()?;

        let node = self.ast
                       .push(NodeKind::ExpressionStatement { expression }, token);
        self.ast.add_child(node, expression);
        Ok(node)
    }
}
