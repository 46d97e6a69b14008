use arithmos::{ErrorKind, Lexer, Parser, TokenKind};

fn shape(text: &str) -> String {
    let parser = Parser::from_source("<test>", text).expect("Lexing failed");
    parser.parse().expect("Parsing failed").to_string()
}

#[test]
fn test_numeric_literal_is_one_token() {
    let inputs = ["0", "7", "42", "007", "123456", "0.5", "3.", "10.25", "99.0001"];

    for input in inputs {
        let tokens = Lexer::new("<test>", input)
            .tokenize()
            .expect("Lexing failed");
        let len = input.chars().count();

        assert_eq!(tokens.len(), 2, "input {:?}", input);
        assert_eq!(tokens[0].start.index, 0, "input {:?}", input);
        assert_eq!(tokens[0].end.index, len, "input {:?}", input);

        let has_dot = input.contains('.');
        match tokens[0].kind {
            TokenKind::Int(_) => assert!(!has_dot, "input {:?}", input),
            TokenKind::Float(_) => assert!(has_dot, "input {:?}", input),
            other => panic!("Expected number for {:?}, got {}", input, other),
        }
    }
}

#[test]
fn test_illegal_character_span_is_one_char() {
    let inputs = [("a", 0), ("1 + b", 4), ("(2)!", 3), ("1\t^ 2", 2), ("4 = 4", 2), ("5 é", 2)];

    for (input, at) in inputs {
        let err = Lexer::new("<test>", input).tokenize().unwrap_err();

        assert_eq!(err.kind, ErrorKind::IllegalCharacter, "input {:?}", input);
        assert_eq!(err.start.index, at, "input {:?}", input);
        assert_eq!(err.end.index, at + 1, "input {:?}", input);
    }
}

#[test]
fn test_left_associativity() {
    assert_eq!(shape("8-4-2"), "((INT:8, MINUS, INT:4), MINUS, INT:2)");
    assert_eq!(shape("1+2-3+4"), "(((INT:1, PLUS, INT:2), MINUS, INT:3), PLUS, INT:4)");
    assert_eq!(shape("2*3/4*5"), "(((INT:2, MUL, INT:3), DIV, INT:4), MUL, INT:5)");
}

#[test]
fn test_precedence() {
    assert_eq!(shape("2+3*4"), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
    assert_eq!(shape("2-6/3+1"), "((INT:2, MINUS, (INT:6, DIV, INT:3)), PLUS, INT:1)");
}

#[test]
fn test_parentheses() {
    assert_eq!(shape("(2+3)*4"), "((INT:2, PLUS, INT:3), MUL, INT:4)");
    assert_eq!(shape("8-(4-2)"), "(INT:8, MINUS, (INT:4, MINUS, INT:2))");
    assert_eq!(shape("((((1))))"), "INT:1");
}

#[test]
fn test_unary_stacking() {
    assert_eq!(shape("--5"), "(MINUS, (MINUS, INT:5))");
    assert_eq!(shape("-+-1.5"), "(MINUS, (PLUS, (MINUS, FLOAT:1.5)))");
    assert_eq!(shape("-(1+2)"), "(MINUS, (INT:1, PLUS, INT:2))");
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(shape(" 1\t+  2 "), shape("1+2"));
}
