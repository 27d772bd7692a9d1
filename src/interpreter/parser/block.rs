use crate::{
    ast::{NIL, NodeKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an indentation-delimited block.
    ///
    /// A block follows the `:` of its header and consists of a newline, an
    /// `INDENT`, one or more statements, and the matching `DEDENT`. Blank
    /// lines between statements are skipped.
    ///
    /// # Returns
    /// The arena index of the block node; its statements are linked as the
    /// block's children.
    pub(crate) fn parse_block(&mut self) -> ParseResult<u32> {
        let token = self.token_index();

        self.expect(&TokenKind::Newline, "newline after ':'")?;
        self.expect(&TokenKind::Indent, "indented block")?;

        let mut statements = Vec::new();
        while !self.check(&TokenKind::Dedent) && !self.at_end() {
            if self.eat(&TokenKind::Newline) {
                continue;
            }
            statements.push(self.parse_statement()?);
        }

        self.expect(&TokenKind::Dedent, "dedent to close block")?;

        let node = self.ast.push(NodeKind::Block { statements:      statements.first()
                                                                              .copied()
                                                                              .unwrap_or(NIL),
                                                   statement_count:
                                                       u32::try_from(statements.len()).unwrap_or(0), },
                                 token);
        for statement in statements {
            self.ast.add_child(node, statement);
        }
        Ok(node)
    }
}
