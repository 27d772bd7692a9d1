use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// `print(...)`: writes each argument's string form separated by
    /// spaces, followed by a newline. With no arguments it prints a blank
    /// line. Always returns `none`.
    pub(crate) fn print(&mut self, args: &[Value]) -> EvalResult<Value> {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        let line = rendered.join(" ");

        writeln!(self.output, "{line}").map_err(|e| RuntimeError::InvalidArgument { details: format!("print() failed to write output: {e}"), })?;

        Ok(Value::None)
    }

    /// `input(prompt?)`: reads one line from standard input, optionally
    /// printing a prompt first. The trailing newline is stripped.
    pub(crate) fn input(args: &[Value]) -> EvalResult<Value> {
        if args.len() > 1 {
            return Err(RuntimeError::ArityMismatch { name:     "input".to_string(),
                                                     expected: "0 or 1".to_string(),
                                                     found:    args.len(), });
        }

        if let Some(prompt) = args.first() {
            print!("{prompt}");
            let _ = std::io::stdout().flush();
        }

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| RuntimeError::InvalidArgument { details: format!("input() failed to read a line: {e}"), })?;

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(Value::Str(line))
    }
}
