//! Value parser tests
//!
//! Grammar coverage for objects, arrays, strings, numbers and keywords, plus
//! error offsets and messages for every failure class.

use datasieve_core::{DynamicValue, ParseError, ParseErrorKind, ParserConfig, parse, parse_with_config};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse_err(text: &str) -> ParseError {
    match parse(text) {
        Ok(value) => panic!("expected {text:?} to fail, parsed {value:?}"),
        Err(error) => error,
    }
}

#[test]
fn canonical_document_keeps_key_order_and_values() {
    init_logging();
    let tree = parse(r#"{"a":1,"b":[true,false,null],"c":"x\"y"}"#).expect("canonical document");

    let map = tree.as_object().expect("object root");
    assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(map["a"], DynamicValue::Number(1.0));
    assert_eq!(
        map["b"],
        DynamicValue::Array(vec![
            DynamicValue::Bool(true),
            DynamicValue::Bool(false),
            DynamicValue::Null,
        ])
    );
    assert_eq!(map["c"].as_str(), Some("x\"y"));
}

#[test]
fn empty_object_keys_are_rejected_at_the_opening_quote() {
    let error = parse_err(r#"{"":1}"#);
    assert_eq!(error.kind, ParseErrorKind::EmptyKey);
    assert_eq!(error.offset, 1);
    assert_eq!(error.to_string(), "empty object key at offset 1");

    let error = parse_err(r#"{"a": {"b": 1, "": 2}}"#);
    assert_eq!(error.kind, ParseErrorKind::EmptyKey);
    assert_eq!(error.offset, 15);

    let value = parse(r#"{" ": ""}"#).expect("blank but non-empty key");
    assert_eq!(value.get(" ").and_then(DynamicValue::as_str), Some(""));
}

#[test]
fn whitespace_between_tokens_is_insignificant() {
    let compact = parse(r#"{"a":1,"b":[true,false,null],"c":"x\"y"}"#).expect("compact");
    let spaced = parse(
        " {\n\t\"a\" :\t1 ,\r\n  \"b\" : [ true ,\n false , null\t] ,  \"c\"\n:\"x\\\"y\"\r\n}\n ",
    )
    .expect("spaced");
    assert_eq!(compact, spaced);
}

#[test]
fn duplicate_keys_last_write_wins_in_first_position() {
    let tree = parse(r#"{"a":1,"a":2}"#).expect("duplicates");
    let map = tree.as_object().expect("object root");
    assert_eq!(map.len(), 1);
    assert_eq!(map["a"].as_f64(), Some(2.0));

    let tree = parse(r#"{"a":1,"b":2,"a":3}"#).expect("duplicates");
    let map = tree.as_object().expect("object root");
    assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(map["a"].as_f64(), Some(3.0));
}

#[test]
fn missing_value_reports_offset_of_closing_brace() {
    init_logging();
    let error = parse_err(r#"{"a":}"#);
    assert_eq!(error.offset, 5);
    assert_eq!(error.kind, ParseErrorKind::UnexpectedCharacter { found: '}' });
    assert_eq!(
        error.to_string(),
        "unexpected character '}' while expecting a value at offset 5"
    );
}

#[test]
fn structural_errors_name_expected_and_found() {
    let error = parse_err(r#"{"a" 1}"#);
    assert_eq!(error.to_string(), "expected ':' but found '1' at offset 5");

    let error = parse_err(r#"{"a":1 "b":2}"#);
    assert_eq!(error.kind, ParseErrorKind::Expected { expected: "',' or '}'", found: '"' });
    assert_eq!(error.offset, 7);

    let error = parse_err("[1 2]");
    assert_eq!(error.kind, ParseErrorKind::Expected { expected: "',' or ']'", found: '2' });
    assert_eq!(error.offset, 3);

    let error = parse_err("{a:1}");
    assert_eq!(error.to_string(), "expected '\"' but found 'a' at offset 1");

    let error = parse_err("[,1]");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedCharacter { found: ',' });
    assert_eq!(error.offset, 1);
}

#[test]
fn end_of_input_inside_containers() {
    let error = parse_err(r#"{"a":1"#);
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEnd { context: "object" });
    assert_eq!(error.offset, 6);
    assert_eq!(
        error.message(),
        "unexpected end of input while parsing object"
    );
    assert!(error.is_end_of_input());

    let error = parse_err("{");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEnd { context: "object" });

    let error = parse_err("[1,");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEnd { context: "array" });
    assert_eq!(error.offset, 3);
}

#[test]
fn unterminated_string_fails_by_default() {
    let error = parse_err(r#"{"name": "Cha"#);
    assert_eq!(error.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(error.offset, 9);
    assert!(error.is_end_of_input());
}

#[test]
fn lenient_strings_return_truncated_text() {
    let config = ParserConfig::default().lenient_strings(true);

    let value = parse_with_config(r#""Cha"#, &config).expect("lenient string");
    assert_eq!(value, DynamicValue::String("Cha".to_string()));

    let value = parse_with_config(r#""ab\"#, &config).expect("dangling backslash");
    assert_eq!(value.as_str(), Some("ab"));

    let value = parse_with_config(r#""a\"b"#, &config).expect("escape before end");
    assert_eq!(value.as_str(), Some("a\"b"));
}

#[test]
fn only_quote_and_backslash_escapes_are_accepted() {
    let value = parse(r#""back\\slash \"quoted\"""#).expect("valid escapes");
    assert_eq!(value.as_str(), Some(r#"back\slash "quoted""#));

    let error = parse_err(r#""a\nb""#);
    assert_eq!(error.kind, ParseErrorKind::InvalidEscape('n'));
    assert_eq!(error.offset, 2);
    assert_eq!(error.to_string(), "unexpected escape sequence '\\n' at offset 2");

    let error = parse_err(r#""\u0041""#);
    assert_eq!(error.kind, ParseErrorKind::InvalidEscape('u'));
}

#[test]
fn numbers_share_one_representation() {
    let value = parse("[0, 42, -7, 2.5, -0.125, 3.]").expect("numbers");
    let numbers: Vec<f64> = value
        .as_array()
        .expect("array")
        .iter()
        .filter_map(DynamicValue::as_f64)
        .collect();
    assert_eq!(numbers, vec![0.0, 42.0, -7.0, 2.5, -0.125, 3.0]);
}

#[test]
fn malformed_numbers_fail_with_token() {
    let error = parse_err(r#"{"n": 1-2.3.4}"#);
    assert_eq!(error.kind, ParseErrorKind::InvalidNumber("1-2.3.4".to_string()));
    assert_eq!(error.offset, 6);

    let error = parse_err("-");
    assert_eq!(error.kind, ParseErrorKind::InvalidNumber("-".to_string()));
}

#[test]
fn exponents_are_outside_the_grammar() {
    let error = parse_err("1e5");
    assert_eq!(error.kind, ParseErrorKind::TrailingCharacter('e'));
    assert_eq!(error.offset, 1);
}

#[test]
fn keywords_and_bad_literals() {
    assert_eq!(parse("true").ok(), Some(DynamicValue::Bool(true)));
    assert_eq!(parse(" false ").ok(), Some(DynamicValue::Bool(false)));
    assert_eq!(parse("null").ok(), Some(DynamicValue::Null));

    let error = parse_err("nul");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedCharacter { found: 'n' });
    assert_eq!(error.offset, 0);

    let error = parse_err("truex");
    assert_eq!(error.kind, ParseErrorKind::TrailingCharacter('x'));
    assert_eq!(error.offset, 4);
}

#[test]
fn empty_input_is_null() {
    assert_eq!(parse("").ok(), Some(DynamicValue::Null));
    assert_eq!(parse(" \t\r\n").ok(), Some(DynamicValue::Null));
}

#[test]
fn trailing_content_after_document_is_rejected() {
    let error = parse_err("{} {}");
    assert_eq!(error.kind, ParseErrorKind::TrailingCharacter('{'));
    assert_eq!(error.offset, 3);
}

#[test]
fn trailing_separator_before_close_is_tolerated() {
    assert_eq!(
        parse("[1,]").ok(),
        Some(DynamicValue::Array(vec![DynamicValue::Number(1.0)]))
    );
    let tree = parse(r#"{"a":1,}"#).expect("trailing comma in object");
    assert_eq!(tree.get("a").and_then(DynamicValue::as_f64), Some(1.0));
}

#[test]
fn non_ascii_text_passes_through() {
    let tree = parse(r#"{"név": "Ünïcode ✓", "emoji": "🍵 tea"}"#).expect("unicode");
    assert_eq!(tree.get("név").and_then(DynamicValue::as_str), Some("Ünïcode ✓"));
    assert_eq!(tree.get("emoji").and_then(DynamicValue::as_str), Some("🍵 tea"));

    let error = parse_err("[1 é]");
    assert_eq!(error.kind, ParseErrorKind::Expected { expected: "',' or ']'", found: 'é' });
}

#[test]
fn nesting_beyond_limit_is_an_error() {
    let config = ParserConfig::default().max_depth(3);
    assert!(parse_with_config("[[[1]]]", &config).is_ok());

    let error = parse_with_config("[[[[1]]]]", &config).expect_err("too deep");
    assert_eq!(error.kind, ParseErrorKind::DepthExceeded(3));
    assert_eq!(error.offset, 3);

    let hostile = "[".repeat(200);
    let error = parse_err(&hostile);
    assert_eq!(error.kind, ParseErrorKind::DepthExceeded(128));
}

#[test]
fn nested_documents_parse_into_owned_tree() {
    let tree = parse(
        r#"{
            "@odata.context": "https://example.test/$metadata#Products",
            "value": [
                {"ProductID": 1, "ProductName": "Chai", "UnitPrice": 18.0, "Tags": ["tea", "hot"]},
                {"ProductID": 2, "ProductName": "Chang", "UnitPrice": 19.0, "Supplier": {"Id": 1}}
            ]
        }"#,
    )
    .expect("service payload");

    let items = tree.get("value").and_then(DynamicValue::as_array).expect("value array");
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[1].get("Supplier").and_then(|s| s.get("Id")).and_then(DynamicValue::as_f64),
        Some(1.0)
    );
    assert_eq!(items[0].get("Tags").and_then(DynamicValue::as_array).map(<[_]>::len), Some(2));
}
