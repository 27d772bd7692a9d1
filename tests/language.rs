use dakota::run_source_with_output;

fn run(source: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_source_with_output(source, &mut output) {
        panic!("Script failed: {e}\nSource:\n{source}");
    }
    String::from_utf8(output).expect("program output is UTF-8")
}

fn run_error(source: &str) -> String {
    let mut output = Vec::new();
    match run_source_with_output(source, &mut output) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn arithmetic_basics() {
    let out = run("x = 10\ny = 5\nprint(x + y)\nprint(x / y)\nprint(x ** 2)\n");
    assert_eq!(out, "15\n2\n100\n");
}

#[test]
fn integer_division_yields_float() {
    assert_eq!(run("print(1 / 2)\n"), "0.5\n");
}

#[test]
fn float_output_strips_trailing_zeros() {
    assert_eq!(run("print(4.0)\n"), "4\n");
    assert_eq!(run("print(3.140000)\n"), "3.14\n");
    assert_eq!(run("print(2.5e-1)\n"), "0.25\n");
}

#[test]
fn modulo_is_integer_only() {
    assert_eq!(run("print(10 % 3)\n"), "1\n");
    let message = run_error("print(10.0 % 3)\n");
    assert!(message.contains("integer operands"), "{message}");
}

#[test]
fn matrix_add_and_multiply() {
    let out = run("A = [1, 2; 3, 4]\nB = [2, 0; 1, 2]\nprint(A + B)\nprint(A mult B)\n");
    assert_eq!(out, "[3,2;4,6]\n[4,4;10,8]\n");
}

#[test]
fn matrix_scalar_broadcasting() {
    assert_eq!(run("print([1, 2; 3, 4] * 2)\n"), "[2,4;6,8]\n");
    assert_eq!(run("print(2 * [1, 2; 3, 4])\n"), "[2,4;6,8]\n");
    assert_eq!(run("print([2, 4; 6, 8] / 2)\n"), "[1,2;3,4]\n");
}

#[test]
fn star_does_not_multiply_matrices() {
    let message = run_error("x = [1, 2; 3, 4] * [1, 0; 0, 1]\n");
    assert!(message.contains("Cannot multiply"), "{message}");
}

#[test]
fn matrix_members() {
    let out = run("M = [1, 2; 3, 4]\nprint(M.T)\nprint(M.d)\n");
    assert_eq!(out, "[1,3;2,4]\n-2\n");
}

#[test]
fn member_chain_on_matrix_literal() {
    assert_eq!(run("print([1, 2; 3, 4].T.T)\n"), "[1,2;3,4]\n");
}

#[test]
fn matrix_inverse_member() {
    assert_eq!(run("print([2, 0; 0, 4].I)\n"), "[0.5,0;0,0.25]\n");
}

#[test]
fn functional_matrix_forms() {
    assert_eq!(run("print(transpose([1, 2; 3, 4]))\n"), "[1,3;2,4]\n");
    assert_eq!(run("print(determinant([1, 2; 3, 4]))\n"), "-2\n");
    assert_eq!(run("print(inverse([2, 0; 0, 4]))\n"), "[0.5,0;0,0.25]\n");
}

#[test]
fn matrix_row_access() {
    assert_eq!(run("m = [1, 2; 3, 4]\nprint(m[1])\n"), "[3,4]\n");
}

#[test]
fn matrix_row_access_out_of_range() {
    let message = run_error("m = [1, 2]\nx = m[5]\n");
    assert!(message.contains("out of bounds"), "{message}");
}

#[test]
fn empty_matrix_is_valid_but_not_indexable() {
    assert_eq!(run("print([])\n"), "[]\n");
    run_error("x = [][0]\n");
}

#[test]
fn matrix_constructors() {
    assert_eq!(run("print(zeros(2, 3))\n"), "[0,0,0;0,0,0]\n");
    assert_eq!(run("print(ones(1, 2))\n"), "[1,1]\n");
    assert_eq!(run("print(eye(2))\n"), "[1,0;0,1]\n");
}

#[test]
fn if_else_statement() {
    let source = "x = 10\nif x > 0:\n    result = \"positive\"\nelse:\n    result = \"non-positive\"\nprint(result)\n";
    assert_eq!(run(source), "positive\n");
}

#[test]
fn elif_chain() {
    let source = "x = 5\nif x > 10:\n    print(\"big\")\nelif x > 3:\n    print(\"medium\")\nelse:\n    print(\"small\")\n";
    assert_eq!(run(source), "medium\n");
}

#[test]
fn while_loop() {
    let source = "i = 0\ntotal = 0\nwhile i < 5:\n    total = total + i\n    i = i + 1\nprint(total)\n";
    assert_eq!(run(source), "10\n");
}

#[test]
fn for_visits_rows_in_order() {
    let source = "for row in [1, 2; 3, 4; 5, 6]:\n    print(row)\n";
    assert_eq!(run(source), "[1,2]\n[3,4]\n[5,6]\n");
}

#[test]
fn for_over_range_accumulates() {
    let source = "total = zeros(1, 1)\nfor row in range(1, 6):\n    total = total + row\nprint(total)\n";
    assert_eq!(run(source), "[15]\n");
}

#[test]
fn for_requires_a_matrix() {
    let message = run_error("for x in 5:\n    print(x)\n");
    assert!(message.contains("matrix"), "{message}");
}

#[test]
fn range_forms() {
    assert_eq!(run("print(range(3))\n"), "[0;1;2]\n");
    assert_eq!(run("print(range(2, 5))\n"), "[2;3;4]\n");
    assert_eq!(run("print(range(10, 0, -2))\n"), "[10;8;6;4;2]\n");
    run_error("print(range(1, 5, 0))\n");
}

#[test]
fn user_functions_and_recursion() {
    let source = "function add(a, b):\n    return a + b\nprint(add(2, 3))\n";
    assert_eq!(run(source), "5\n");

    let fib = "function fibonacci(n):\n    if n < 2:\n        return n\n    return fibonacci(n - 1) + fibonacci(n - 2)\nprint(fibonacci(10))\n";
    assert_eq!(run(fib), "55\n");
}

#[test]
fn nested_function_captures_enclosing_scope() {
    let source = "function outer(n):\n    function inner(x):\n        return x + n\n    return inner(5)\nprint(outer(10))\n";
    assert_eq!(run(source), "15\n");
}

#[test]
fn function_without_return_yields_none() {
    let source = "function greet():\n    print(\"hello\")\nprint(greet())\n";
    assert_eq!(run(source), "hello\nnone\n");
}

#[test]
fn wrong_arity_is_an_error() {
    let message = run_error("function f(x, y):\n    return x\nf(3)\n");
    assert!(message.contains("expects 2 argument(s), got 1"), "{message}");
}

#[test]
fn undefined_function_is_an_error() {
    let message = run_error("mystery(1)\n");
    assert!(message.contains("Undefined function 'mystery'"), "{message}");
}

#[test]
fn undefined_variable_is_an_error() {
    let message = run_error("print(ghost)\n");
    assert!(message.contains("Undefined variable 'ghost'"), "{message}");
}

#[test]
fn division_by_zero_message() {
    assert_eq!(run_error("x = 1 / 0\n"), "Runtime Error: Division by zero");
    run_error("x = 1.5 / 0.0\n");
    run_error("x = 7 % 0\n");
}

#[test]
fn assignment_rebinds_enclosing_scope() {
    let source = "x = 1\nfunction set_x():\n    x = 99\n    return 0\nset_x()\nprint(x)\n";
    assert_eq!(run(source), "99\n");
}

#[test]
fn loop_bodies_mutate_outer_bindings() {
    let source = "flag = 0\nfor row in [1; 2]:\n    flag = flag + 1\nprint(flag)\n";
    assert_eq!(run(source), "2\n");
}

#[test]
fn string_concatenation_and_length() {
    assert_eq!(run("print(\"foo\" + \"bar\")\n"), "foobar\n");
    assert_eq!(run("print(len(\"hello\"))\n"), "5\n");
    assert_eq!(run("print(len([1, 2; 3, 4]))\n"), "2\n");
}

#[test]
fn string_escapes_decode() {
    assert_eq!(run("print(\"a\\tb\")\n"), "a\tb\n");
    assert_eq!(run("print(\"line1\\nline2\")\n"), "line1\nline2\n");
    assert_eq!(run("print(\"quote: \\\"\")\n"), "quote: \"\n");
}

#[test]
fn string_comparison_is_lexicographic() {
    assert_eq!(run("print(\"abc\" < \"abd\")\n"), "true\n");
    assert_eq!(run("print(\"b\" > \"a\")\n"), "true\n");
}

#[test]
fn logical_operators_produce_booleans() {
    assert_eq!(run("print(1 and \"x\")\n"), "true\n");
    assert_eq!(run("print(0 or false)\n"), "false\n");
    assert_eq!(run("print(not 0)\n"), "true\n");
}

#[test]
fn truthiness_in_conditions() {
    let source = "if []:\n    print(\"yes\")\nelse:\n    print(\"no\")\n";
    assert_eq!(run(source), "no\n");

    let nonempty = "if [0]:\n    print(\"yes\")\nelse:\n    print(\"no\")\n";
    assert_eq!(run(nonempty), "yes\n");
}

#[test]
fn float_equality_uses_tolerance() {
    assert_eq!(run("print(0.1 + 0.2 == 0.3)\n"), "true\n");
}

#[test]
fn print_without_arguments_prints_blank_line() {
    assert_eq!(run("print()\n"), "\n");
}

#[test]
fn print_separates_arguments_with_spaces() {
    assert_eq!(run("print(1, \"two\", 3.0)\n"), "1 two 3\n");
}

#[test]
fn builtin_math_functions() {
    assert_eq!(run("print(abs(-4))\n"), "4\n");
    assert_eq!(run("print(sqrt(9))\n"), "3\n");
    assert_eq!(run("print(floor(3.7))\n"), "3\n");
    assert_eq!(run("print(ceil(3.2))\n"), "4\n");
    assert_eq!(run("print(round(3.5))\n"), "4\n");
    assert_eq!(run("print(pow(2, 10))\n"), "1024\n");
    assert_eq!(run("print(sin(0))\n"), "0\n");
}

#[test]
fn continuation_lines_extend_the_previous_statement() {
    let source = "x = 1\n  + 2\n  + 3\nprint(x)\n";
    assert_eq!(run(source), "6\n");
}

#[test]
fn comments_are_ignored() {
    let source = "x = 1 \\ set x to one\n\\ a full-line comment\nprint(x)\n";
    assert_eq!(run(source), "1\n");
}

#[test]
fn source_without_trailing_newline_runs() {
    assert_eq!(run("print(42)"), "42\n");
}

#[test]
fn determinant_requires_square_matrix() {
    let message = run_error("x = [1, 2, 3; 4, 5, 6].d\n");
    assert!(message.contains("square"), "{message}");
}

#[test]
fn inverse_of_singular_matrix_is_an_error() {
    let message = run_error("x = [1, 2; 2, 4].I\n");
    assert!(message.contains("singular"), "{message}");
}

#[test]
fn mult_requires_matching_inner_dimensions() {
    let message = run_error("x = [1, 2; 3, 4] mult [1, 2, 3]\n");
    assert!(message.contains("dimensions"), "{message}");
}

#[test]
fn unknown_member_is_an_error() {
    let message = run_error("x = [1, 2; 3, 4].Q\n");
    assert!(message.contains("Unknown member 'Q'"), "{message}");
}

#[test]
fn global_state_is_inspectable_after_a_run() {
    use dakota::interpreter::{evaluator::Interpreter, value::Value};

    let tokens = dakota::tokenize("x = 2 + 3\n").unwrap();
    let ast = dakota::parse(&tokens).unwrap();

    let mut sink = Vec::new();
    let mut interpreter = Interpreter::with_output(&ast, Box::new(&mut sink));
    interpreter.interpret().unwrap();

    let globals = interpreter.globals();
    assert!(globals.borrow().exists("x"));
    assert!(!globals.borrow().exists("y"));
    assert_eq!(globals.borrow().get("x").unwrap(), Value::Integer(5));
}
