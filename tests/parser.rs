use dakota::{
    ast::{Ast, BinaryOpKind, NIL, NodeKind},
    interpreter::lexer::Lexer,
};

fn parse(source: &str) -> Ast {
    let tokens = Lexer::new()
        .tokenize(source)
        .unwrap_or_else(|e| panic!("lexing failed: {e}"));
    dakota::parse(&tokens).unwrap_or_else(|errors| {
                              panic!("parsing failed: {:?}\nSource:\n{source}", errors)
                          })
}

fn parse_errors(source: &str) -> Vec<dakota::error::ParseError> {
    let tokens = Lexer::new()
        .tokenize(source)
        .unwrap_or_else(|e| panic!("lexing failed: {e}"));
    match dakota::parse(&tokens) {
        Ok(_) => panic!("parsing succeeded but was expected to fail:\n{source}"),
        Err(errors) => errors,
    }
}

/// First statement of the program root.
fn first_statement(ast: &Ast) -> u32 {
    ast.node(0).expect("root exists").first_child
}

/// The expression under the program's first expression statement.
fn first_expression(ast: &Ast) -> u32 {
    let statement = first_statement(ast);
    match ast.node(statement).expect("statement exists").kind {
        NodeKind::ExpressionStatement { expression } => expression,
        other => panic!("expected expression statement, found {other:?}"),
    }
}

#[test]
fn every_node_has_exactly_one_parent() {
    let ast = parse("x = 1\ny = [1, 2; 3, 4]\nif x:\n    z = x + 1\nprint(x, y)\n");

    for index in 1..u32::try_from(ast.node_count()).unwrap() {
        let node = ast.node(index).expect("node exists");
        assert_ne!(node.parent, NIL, "node {index} has no parent");

        let parent = ast.node(node.parent).expect("parent exists");
        let siblings = ast.children(parent.first_child).expect("child list is acyclic");
        let occurrences = siblings.iter().filter(|&&child| child == index).count();
        assert_eq!(occurrences, 1,
                   "node {index} appears {occurrences} times in its parent's child list");
    }
}

#[test]
fn matrix_literal_shape_matches_element_count() {
    let ast = parse("m = [1, 2, 3; 4, 5, 6]\n");

    let mut found = false;
    for index in 0..u32::try_from(ast.node_count()).unwrap() {
        if let NodeKind::MatrixLiteral { rows,
                                         cols,
                                         elements,
                                         is_empty, } = ast.node(index).unwrap().kind
        {
            let count = ast.children(elements).expect("elements are acyclic").len();
            assert_eq!((rows * cols) as usize, count);
            assert_eq!((rows, cols), (2, 3));
            assert!(!is_empty);
            found = true;
        }
    }
    assert!(found, "no matrix literal in the tree");
}

#[test]
fn empty_matrix_literal_is_flagged() {
    let ast = parse("m = []\n");

    let empties = (0..u32::try_from(ast.node_count()).unwrap())
        .filter(|&i| matches!(ast.node(i).unwrap().kind,
                              NodeKind::MatrixLiteral { is_empty: true, rows: 0, cols: 0, .. }))
        .count();
    assert_eq!(empties, 1);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let ast = parse("1 + 2 * 3\n");

    let NodeKind::BinaryOp { op, right, .. } = ast.node(first_expression(&ast)).unwrap().kind
    else {
        panic!("expected a binary operation at the top");
    };
    assert_eq!(op, BinaryOpKind::Add);

    let NodeKind::BinaryOp { op: inner, .. } = ast.node(right).unwrap().kind else {
        panic!("expected multiplication under the addition");
    };
    assert_eq!(inner, BinaryOpKind::Mul);
}

#[test]
fn exponentiation_is_right_associative() {
    let ast = parse("2 ** 3 ** 2\n");

    let NodeKind::BinaryOp { op, left, right } = ast.node(first_expression(&ast)).unwrap().kind
    else {
        panic!("expected a binary operation at the top");
    };
    assert_eq!(op, BinaryOpKind::Pow);
    assert!(matches!(ast.node(left).unwrap().kind, NodeKind::IntegerLiteral(2)));
    assert!(matches!(ast.node(right).unwrap().kind,
                     NodeKind::BinaryOp { op: BinaryOpKind::Pow, .. }));
}

#[test]
fn and_binds_tighter_than_or() {
    let ast = parse("true or false and true\n");

    let NodeKind::BinaryOp { op, right, .. } = ast.node(first_expression(&ast)).unwrap().kind
    else {
        panic!("expected a binary operation at the top");
    };
    assert_eq!(op, BinaryOpKind::Or);
    assert!(matches!(ast.node(right).unwrap().kind,
                     NodeKind::BinaryOp { op: BinaryOpKind::And, .. }));
}

#[test]
fn comparison_binds_tighter_than_logic() {
    let ast = parse("1 < 2 and 3 < 4\n");

    let NodeKind::BinaryOp { op, left, right } = ast.node(first_expression(&ast)).unwrap().kind
    else {
        panic!("expected a binary operation at the top");
    };
    assert_eq!(op, BinaryOpKind::And);
    assert!(matches!(ast.node(left).unwrap().kind,
                     NodeKind::BinaryOp { op: BinaryOpKind::Lt, .. }));
    assert!(matches!(ast.node(right).unwrap().kind,
                     NodeKind::BinaryOp { op: BinaryOpKind::Lt, .. }));
}

#[test]
fn unary_chains_and_postfix_accesses() {
    let ast = parse("--x\n");
    let NodeKind::UnaryOp { operand, .. } = ast.node(first_expression(&ast)).unwrap().kind else {
        panic!("expected unary negation");
    };
    assert!(matches!(ast.node(operand).unwrap().kind, NodeKind::UnaryOp { .. }));

    let ast = parse("m[0].T\n");
    let NodeKind::MemberAccess { object, .. } = ast.node(first_expression(&ast)).unwrap().kind
    else {
        panic!("expected member access at the top");
    };
    assert!(matches!(ast.node(object).unwrap().kind, NodeKind::ArrayAccess { .. }));
}

#[test]
fn assignment_target_is_an_identifier() {
    let ast = parse("velocity = 3\n");

    let NodeKind::Assignment { target, value } = ast.node(first_statement(&ast)).unwrap().kind
    else {
        panic!("expected an assignment");
    };
    assert!(matches!(ast.node(target).unwrap().kind, NodeKind::Identifier { .. }));
    assert!(matches!(ast.node(value).unwrap().kind, NodeKind::IntegerLiteral(3)));
}

#[test]
fn block_statement_count_matches_children() {
    let ast = parse("if x:\n    a = 1\n    b = 2\n    c = 3\n");

    let mut checked = false;
    for index in 0..u32::try_from(ast.node_count()).unwrap() {
        if let NodeKind::Block { statements,
                                 statement_count, } = ast.node(index).unwrap().kind
        {
            let children = ast.children(statements).expect("statements are acyclic");
            assert_eq!(children.len(), statement_count as usize);
            assert_eq!(statement_count, 3);
            checked = true;
        }
    }
    assert!(checked, "no block in the tree");
}

#[test]
fn elif_parses_as_nested_if() {
    let ast = parse("if a:\n    x = 1\nelif b:\n    x = 2\nelse:\n    x = 3\n");

    let NodeKind::If { else_block, .. } = ast.node(first_statement(&ast)).unwrap().kind else {
        panic!("expected an if statement");
    };
    assert_ne!(else_block, NIL);
    assert!(matches!(ast.node(else_block).unwrap().kind, NodeKind::If { .. }));
}

#[test]
fn function_definition_structure() {
    let ast = parse("function add(a, b):\n    return a + b\n");

    let NodeKind::FunctionDef { params,
                                param_count,
                                body,
                                .. } = ast.node(first_statement(&ast)).unwrap().kind
    else {
        panic!("expected a function definition");
    };
    assert_eq!(param_count, 2);
    assert_ne!(params, NIL);
    assert!(matches!(ast.node(body).unwrap().kind, NodeKind::Block { .. }));
}

#[test]
fn bare_return_has_no_value() {
    let ast = parse("function f():\n    return\n");

    let returns = (0..u32::try_from(ast.node_count()).unwrap())
        .filter(|&i| matches!(ast.node(i).unwrap().kind, NodeKind::Return { value: NIL }))
        .count();
    assert_eq!(returns, 1);
}

#[test]
fn inconsistent_matrix_rows_are_rejected() {
    let errors = parse_errors("m = [1, 2; 3]\n");
    assert!(errors.iter().any(|e| e.to_string().contains("Inconsistent matrix row lengths")),
            "{errors:?}");
}

#[test]
fn missing_delimiters_are_reported() {
    parse_errors("x = (1 + 2\n");
    parse_errors("m = [1, 2\n");
    parse_errors("if x\n    y = 1\n");
}

#[test]
fn several_errors_are_reported_in_one_run() {
    let errors = parse_errors("x =\ny = 2\nz = )\n");
    assert!(errors.len() >= 2, "expected at least two errors, got {errors:?}");
}

#[test]
fn dangling_clause_keywords_are_unexpected_tokens() {
    let errors = parse_errors("else:\n    x = 1\n");
    assert!(errors.iter().any(|e| e.to_string().contains("Unexpected token: 'else'")),
            "{errors:?}");

    let errors = parse_errors("x = 1\nelif x:\n    y = 2\n");
    assert!(errors.iter().any(|e| e.to_string().contains("Unexpected token: 'elif'")),
            "{errors:?}");
}

#[test]
fn error_positions_are_recorded() {
    let errors = parse_errors("x = )\n");
    let (line, column) = errors[0].position();
    assert_eq!(line, 1);
    assert!(column > 1);
}

#[test]
fn node_count_grows_with_input() {
    let small = parse("x = 1\n");
    let large = parse("x = 1\ny = 2\nz = x + y\n");
    assert!(large.node_count() > small.node_count());
    assert!(large.memory_usage() > 0);
}
