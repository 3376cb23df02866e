mod common;

use buildopts::Parser;

use common::{fixed_source, get_base_registry};

#[test]
fn last_call_wins_even_if_its_priority_number_is_lower() {
    // Priority ordering is the caller's obligation (see `Parser::parse`); the engine itself
    // just applies last-write-wins across calls in the order they were made, irrespective of
    // the numeric priority attached to each. A caller that invokes config-file parsing after
    // command-line parsing gets config-file values winning, numeric priority notwithstanding.
    let mut parser = Parser::new(get_base_registry());
    parser.parse(100, fixed_source("command line"), &args!["--name=cli_value"]).unwrap();
    parser.parse(10, fixed_source("config file"), &args!["--name=config_value"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=config_value".to_string()]);
}

#[test]
fn higher_priority_wins_even_when_parsed_second() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(10, fixed_source("config file"), &args!["--name=config_value"]).unwrap();
    parser.parse(100, fixed_source("command line"), &args!["--name=cli_value"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=cli_value".to_string()]);
}

#[test]
fn equal_priority_is_last_write_wins() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--name=first", "--name=second"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=second".to_string()]);
}

#[test]
fn audit_trail_is_stably_sorted_by_priority() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(10, fixed_source("config file"), &args!["--verbose"]).unwrap();
    parser.parse(100, fixed_source("command line"), &args!["--name=bob"]).unwrap();
    let list = parser.as_complete_list_of_parsed_options();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].definition.long_name, "verbose");
    assert_eq!(list[1].definition.long_name, "name");
}

#[test]
fn expansion_options_are_elided_from_canonical_but_their_expansions_survive() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--all"]).unwrap();
    // "--name" sorts before "--verbose" lexicographically; "--all" itself does not appear.
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=all".to_string(), "--verbose=1".to_string()]);
}

#[test]
fn explicit_value_after_expansion_at_same_priority_overrides_it() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--all", "--name=explicit"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--name=explicit".to_string(), "--verbose=1".to_string()]);
}

#[test]
fn wrapper_unwraps_its_value_and_never_appears_itself() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--wrap=-v"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(), vec!["--verbose=1".to_string()]);
    assert!(!parser.contains_explicit("wrap"));
}

#[test]
fn wrapper_value_not_starting_with_dash_is_an_error() {
    use buildopts::{OptionsParsingError, ParseError};
    let mut parser = Parser::new(get_base_registry());
    let err = parser.parse(0, fixed_source("cli"), &args!["--wrap=verbose"]).unwrap_err();
    match err {
        ParseError::User(OptionsParsingError::WrapperValueNotAnOption { .. }) => {},
        other => panic!("expected WrapperValueNotAnOption, got {:?}", other),
    }
}

#[test]
fn implicit_requirement_is_applied_and_not_explicit() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--core_library"]).unwrap();
    assert!(parser.contains_explicit("core_library"));
    assert!(!parser.contains_explicit("allow_empty_bootclasspath"));
    assert!(parser.get_option_value_description("allow_empty_bootclasspath").is_some());
}

#[test]
fn implicit_requirement_is_grouped_after_explicit_options_in_canonical_form() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--core_library"]).unwrap();
    assert_eq!(parser.as_canonicalized_list(),
        vec!["--core_library=".to_string(), "--allow_empty_bootclasspath=".to_string()]);
}

#[test]
fn clearing_an_option_removes_it_from_every_view() {
    let mut parser = Parser::new(get_base_registry());
    parser.parse(0, fixed_source("cli"), &args!["--verbose"]).unwrap();
    parser.clear("verbose");
    assert!(!parser.contains_explicit("verbose"));
    assert!(parser.get_option_value_description("verbose").is_none());
    assert!(parser.as_canonicalized_list().is_empty());
}
