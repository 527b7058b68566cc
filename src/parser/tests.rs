#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Date;

#[test]
fn test_parser_basic_document() {
    let input = r#"
country_decisions = {
    form_france = {
        major = yes
        potential = {
            tag = FRA
            NOT = { has_country_flag = formed_france }
        }
        ai_will_do = { factor = 1.5 }
    }
}
start_date = 1444.11.11
"#;

    let doc = parse_str(input).expect("Failed to parse document");

    assert_eq!(doc.len(), 2);
    assert_eq!(
        doc.get("start_date"),
        Some(&Value::Scalar(Scalar::Date(Date::new(1444, 11, 11))))
    );

    let decision = doc
        .get("country_decisions")
        .and_then(|v| v.get("form_france"))
        .expect("Expected form_france");
    assert_eq!(decision.get("major"), Some(&Value::Scalar(Scalar::Bool(true))));

    let potential = decision.get("potential").and_then(Value::as_object).unwrap();
    assert_eq!(potential.len(), 2);
    assert_eq!(potential[0], (Key::from("tag"), Value::from("FRA")));
    assert!(matches!(&potential[1].1, Value::Object(items) if items.len() == 1));
}

#[test]
fn test_arrays_and_integer_keys() {
    let input = r#"
provinces = { 183 184 -185 }
names = { "Jean" Louis "Charles le Bel" }
history = {
    1444 = { owner = FRA }
    1500 = { owner = ENG }
}
armies = { { size = 1 } { size = 2 } }
"#;

    let doc = parse_str(input).expect("Failed to parse document");

    assert_eq!(
        doc.get("provinces"),
        Some(&Value::Array(vec![
            Value::Scalar(Scalar::Integer(183)),
            Value::Scalar(Scalar::Integer(184)),
            Value::Scalar(Scalar::Integer(-185)),
        ]))
    );

    let names = doc.get("names").and_then(Value::as_array).unwrap();
    assert_eq!(names[0], Value::from("Jean"));
    assert_eq!(names[2], Value::from("\"Charles le Bel\""));

    let history = doc.get("history").and_then(Value::as_object).unwrap();
    assert_eq!(history[0].0, Key::Integer(1444));
    assert_eq!(history[1].0, Key::Integer(1500));

    let armies = doc.get("armies").and_then(Value::as_array).unwrap();
    assert_eq!(armies.len(), 2);
    assert!(armies.iter().all(|a| a.get("size").is_some()));
}

#[test]
fn test_duplicate_keys_are_preserved() {
    let input = r#"
group = {
    has_idea_group = trade_ideas
    has_idea_group = economic_ideas
    has_idea_group = trade_ideas
}
"#;

    let doc = parse_str(input).expect("Failed to parse document");
    let group = doc.get("group").and_then(Value::as_object).unwrap();

    assert_eq!(group.len(), 3);
    let values: Vec<&str> = group.iter().filter_map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["trade_ideas", "economic_ideas", "trade_ideas"]);
}

#[test]
fn test_empty_block_is_always_an_array() {
    let input = "foo = { }\nbar = {}";

    for _ in 0..3 {
        let doc = parse_str(input).expect("Failed to parse document");
        assert_eq!(doc.get("foo"), Some(&Value::Array(vec![])));
        assert_eq!(doc.get("bar"), Some(&Value::Array(vec![])));
    }
}

#[test]
fn test_round_trip_preserves_order_and_count() {
    let pairs: Vec<(Key, Value)> = vec![
        (Key::from("tag"), Value::from("FRA")),
        (Key::from("tag"), Value::from("FRA")),
        (Key::from("weight"), Value::Scalar(Scalar::Float(0.5))),
        (Key::from("whole"), Value::Scalar(Scalar::Float(3.0))),
        (Key::from("count"), Value::Scalar(Scalar::Integer(-12))),
        (Key::Integer(1444), Value::Scalar(Scalar::Bool(false))),
        (Key::from("date"), Value::Scalar(Scalar::Date(Date::new(1444, 11, 11)))),
        (Key::from("name"), Value::from("\"Kingdom of France\"")),
        (Key::from("flag"), Value::from("yes")),
        (Key::from("icon"), Value::from("GFX_mission.dds")),
    ];

    let rendered = pairs
        .iter()
        .map(|(k, v)| format!("{} = {}", k, v.as_scalar().unwrap()))
        .collect::<Vec<_>>()
        .join("\n");

    let doc = parse_str(&rendered).expect("Failed to parse rendered pairs");
    assert_eq!(doc.pairs, pairs);
}

#[test]
fn test_unclosed_block_reports_last_line() {
    let input = "a = {\n  b = 1\n  c = {\n    d = 2\n}\n";

    let err = parse_str(input).unwrap_err();
    match err {
        ScriptError::UnexpectedEof { line, index, .. } => {
            assert_eq!(line, 5);
            assert_eq!(index, 13);
        }
        other => panic!("Expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_stray_closing_brace_reports_token() {
    let input = "a = { b = 1 }\n}\nc = 2";

    let err = parse_str(input).unwrap_err();
    assert_eq!(
        err,
        ScriptError::SyntaxError {
            token: "}".into(),
            kind: "}".into(),
            line: 2,
            index: 7,
            hint: Some("Expected a key".into()),
            code: Some(202),
        }
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_missing_specifier() {
    let err = parse_str("a = 1\nb 2").unwrap_err();
    assert!(matches!(
        err,
        ScriptError::SyntaxError { ref kind, line: 2, .. } if kind == "INTEGER"
    ));
}

#[test]
fn test_mixed_blocks_are_rejected_deterministically() {
    // Object first: a bare value inside is an error
    let err = parse_str("a = { b = 1 c }").unwrap_err();
    assert!(matches!(err, ScriptError::SyntaxError { ref kind, .. } if kind == "}"));

    // Array first: a pair inside is an error
    let err = parse_str("a = { c b = 1 }").unwrap_err();
    assert!(matches!(err, ScriptError::SyntaxError { ref kind, .. } if kind == "SPECIFIER"));
}

#[test]
fn test_bool_is_not_a_key() {
    let err = parse_str("yes = 1").unwrap_err();
    assert!(matches!(err, ScriptError::SyntaxError { ref kind, index: 0, .. } if kind == "BOOL"));
}

#[test]
fn test_oversized_integer_keeps_its_place() {
    let doc = parse_str("provinces = { 1 99999999999999999999 3 }").expect("Failed to parse");

    let provinces = doc.get("provinces").and_then(Value::as_array).unwrap();
    assert_eq!(provinces.len(), 3);
    assert_eq!(provinces[0], Value::Scalar(Scalar::Integer(1)));
    assert!(matches!(provinces[1], Value::Scalar(Scalar::Float(x)) if x > 9.9e19));
    assert_eq!(provinces[2], Value::Scalar(Scalar::Integer(3)));
}

#[test]
fn test_depth_limit() {
    let deep = format!("a = {}{{ x = 1 }}{}", "{ b = ".repeat(9), " }".repeat(9));
    assert!(parse_str(&deep).is_ok());

    let options = ParseOptions::default().with_max_depth(5);
    let err = parse_str_with(&deep, &options).unwrap_err();
    assert!(matches!(err, ScriptError::DepthExceeded { limit: 5, .. }));
}

#[test]
fn test_parse_from_token_vector() {
    let tokens = vec![
        Token::new(TokenKind::String("key".into()), 1),
        Token::new(TokenKind::Specifier, 1),
        Token::new(TokenKind::BraceOpen, 1),
        Token::new(TokenKind::BraceClose, 2),
    ];

    let doc = parse(tokens).expect("Failed to parse tokens");
    assert_eq!(doc.pairs, vec![(Key::from("key"), Value::Array(vec![]))]);
}

#[test]
fn test_illegal_characters_do_not_stop_parsing() {
    let mut lexer = Lexer::new("a = 1 @\nb = 2");
    let doc = Parser::new(&mut lexer).parse_document().expect("Failed to parse");

    assert_eq!(doc.len(), 2);
    assert_eq!(lexer.diagnostics().len(), 1);
}
