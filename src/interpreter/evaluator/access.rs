use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{Matrix, Value},
    },
};

impl Interpreter<'_> {
    /// Evaluates a matrix literal into a freshly allocated matrix.
    ///
    /// All element expressions are evaluated first, then written row-major
    /// into the declared `rows × cols` shape. Elements must be numeric.
    pub(crate) fn evaluate_matrix_literal(&mut self,
                                          rows: u32,
                                          cols: u32,
                                          elements: u32)
                                          -> EvalResult<Value> {
        let mut data = Vec::with_capacity(rows as usize * cols as usize);

        for element in self.children_of(elements)? {
            let value = self.evaluate_node(element)?;
            if !value.is_numeric() {
                return Err(RuntimeError::TypeMismatch { details:
                                                            "Matrix elements must be numeric".to_string(), });
            }
            data.push(value.as_float()?);
        }

        Matrix::from_data(rows as usize, cols as usize, data).map(Value::Matrix)
                                                             .ok_or(RuntimeError::CorruptSyntaxTree)
    }

    /// Evaluates `m[i]`: row `i` of a matrix as a single-row matrix.
    pub(crate) fn evaluate_array_access(&mut self, object: u32, index: u32) -> EvalResult<Value> {
        let object = self.evaluate_node(object)?;
        let index = self.evaluate_node(index)?;

        let Value::Matrix(matrix) = object else {
            return Err(RuntimeError::TypeMismatch { details:
                                                        "Cannot index non-matrix value".to_string(), });
        };
        let Value::Integer(row) = index else {
            return Err(RuntimeError::TypeMismatch { details:
                                                        "Matrix index must be an integer".to_string(), });
        };

        Ok(Value::Matrix(matrix.row(row)?))
    }

    /// Evaluates `object.member`.
    ///
    /// Matrices provide `.T` (transpose), `.d` (determinant) and `.I`
    /// (inverse); no other type has members.
    pub(crate) fn evaluate_member_access(&mut self, object: u32, member: u32) -> EvalResult<Value> {
        let object = self.evaluate_node(object)?;
        let member = self.text(member).to_string();

        if let Value::Matrix(matrix) = &object {
            return match member.as_str() {
                "T" => Ok(Value::Matrix(matrix.transpose())),
                "d" => Ok(Value::Float(matrix.determinant()?)),
                "I" => Ok(Value::Matrix(matrix.inverse()?)),
                _ => Err(RuntimeError::UnknownMember { member }),
            };
        }

        Err(RuntimeError::UnknownMember { member })
    }
}
