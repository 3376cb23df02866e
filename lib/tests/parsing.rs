mod common;

use assert_matches::assert_matches;
use buildopts::{OptionsParsingError, ParseError, Parser};

use common::{fixed_source, get_base_registry};

#[test]
fn short_option_sets_boolean_true() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["-v"]).unwrap();
    assert!(parser.contains_explicit("verbose"));
}

#[test]
fn short_option_negated_suffix() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["-v-"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--verbose=0".to_string()]);
}

#[test]
fn long_option_with_inline_value() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--name=bob"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=bob".to_string()]);
}

#[test]
fn long_option_with_detached_value() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--name", "bob"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=bob".to_string()]);
}

#[test]
fn unambiguous_abbreviation_matches() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--verb"]).unwrap();
    assert!(parser.contains_explicit("verbose"));
}

#[test]
fn no_prefix_negates_boolean() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--noverbose"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--verbose=0".to_string()]);
}

#[test]
fn no_prefix_on_non_boolean_is_illegal() {
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--noname"]).unwrap_err();
    assert_matches!(err, ParseError::User(OptionsParsingError::IllegalNoPrefix(_)));
}

#[test]
fn no_prefix_rejects_inline_value() {
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--noverbose=1"]).unwrap_err();
    assert_matches!(err, ParseError::User(OptionsParsingError::UnexpectedValue { .. }));
}

#[test]
fn unrecognized_option_is_an_error() {
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--bogus"]).unwrap_err();
    assert_matches!(err, ParseError::User(OptionsParsingError::UnrecognizedOption { .. }));
}

#[test]
fn missing_value_is_an_error() {
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--name"]).unwrap_err();
    assert_matches!(err, ParseError::User(OptionsParsingError::MissingValue(_)));
}

#[test]
fn double_dash_stops_recognition() {
    let mut parser = Parser::new(get_base_registry());
    let leftover = parser.parse(0, fixed_source("cli"), &args!["--verbose", "--", "--name"]).unwrap();
    assert_eq!(leftover, vec!["--name".to_string()]);
}

#[test]
fn non_dash_tokens_are_leftover() {
    let mut parser = Parser::new(get_base_registry());
    let leftover = parser.parse(0, fixed_source("cli"), &args!["build", "--verbose", "target"]).unwrap();
    assert_eq!(leftover, vec!["build".to_string(), "target".to_string()]);
}

#[test]
fn internal_option_is_hidden_from_recognition() {
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--hidden"]).unwrap_err();
    assert_matches!(err, ParseError::User(OptionsParsingError::UnrecognizedOption { .. }));
}

#[test]
fn allows_multiple_accumulates_in_order() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["-D", "a=1", "-D", "b=2"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--define=a=1".to_string(), "--define=b=2".to_string()]);
}

#[test]
fn deprecated_option_emits_a_warning() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--old_name=x"]).unwrap();
    assert_eq!(parser.warnings().len(), 1);
    assert!(parser.warnings()[0].contains("old_name"));
}
