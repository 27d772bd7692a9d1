use crate::{
    ast::{NIL, NodeKind},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a matrix literal.
    ///
    /// Syntax: `[` rows `]`, where each row is a comma-separated list of
    /// expressions and rows are separated by `;`. Every row must have the
    /// same number of columns. `[]` is the valid empty matrix.
    ///
    /// Elements become the matrix node's children in row-major order, so
    /// the declared `rows × cols` always equals the element count.
    pub(crate) fn parse_matrix_literal(&mut self) -> ParseResult<u32> {
        let token = self.token_index();
        self.advance(); // consume '['

        let mut elements = Vec::new();
        let mut rows = 0usize;
        let mut cols = 0usize;

        if !self.check(&TokenKind::RBracket) {
            loop {
                let row_cols = self.parse_matrix_row(&mut elements)?;

                if rows == 0 {
                    cols = row_cols;
                } else if row_cols != cols {
                    let current = self.current();
                    return Err(ParseError::InconsistentMatrixRows { expected: cols,
                                                                    found:    row_cols,
                                                                    line:     current.line,
                                                                    column:   current.column, });
                }
                rows += 1;

                if !self.eat(&TokenKind::Semicolon) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RBracket, "']' after matrix literal")?;

        let node = self.ast.push(NodeKind::MatrixLiteral { rows: u32::try_from(rows).unwrap_or(0),
                                                           cols: u32::try_from(cols).unwrap_or(0),
                                                           elements: elements.first()
                                                                             .copied()
                                                                             .unwrap_or(NIL),
                                                           is_empty: elements.is_empty() },
                                 token);
        for element in elements {
            self.ast.add_child(node, element);
        }
        Ok(node)
    }

    /// Parses one comma-separated row and returns its column count.
    fn parse_matrix_row(&mut self, elements: &mut Vec<u32>) -> ParseResult<usize> {
        let mut row_cols = 0;
        loop {
            elements.push(self.parse_expression()?);
            row_cols += 1;
            if !self.eat(&TokenKind::Comma) {
                return Ok(row_cols);
            }
        }
    }
}
