mod common;

use buildopts::{OptionDefinition, RegistryBuilder, RegistryFlaw};

use common::base;

#[test]
fn duplicate_long_name_is_reported() {
    let flaws = RegistryBuilder::new()
        .add(base("name"))
        .add(base("name"))
        .validate()
        .unwrap_err();
    assert!(flaws.contains(&RegistryFlaw::DuplicateLongName("name".to_string())));
}

#[test]
fn duplicate_abbrev_is_reported() {
    let flaws = RegistryBuilder::new()
        .add(OptionDefinition { abbrev: Some('v'), ..base("verbose") })
        .add(OptionDefinition { abbrev: Some('v'), ..base("version") })
        .validate()
        .unwrap_err();
    assert!(flaws.contains(&RegistryFlaw::DuplicateAbbrev('v')));
}

#[test]
fn expansion_and_wrapper_on_the_same_definition_is_reported() {
    let flaws = RegistryBuilder::new()
        .add(OptionDefinition {
            is_expansion: true,
            is_wrapper: true,
            ..base("both")
        })
        .validate()
        .unwrap_err();
    assert!(flaws.contains(&RegistryFlaw::ExpansionAndWrapper("both".to_string())));
}

#[test]
fn a_clean_registry_validates_with_no_flaws() {
    RegistryBuilder::new()
        .add(base("verbose"))
        .validate()
        .unwrap();
}

#[cfg(feature = "suggestions")]
#[test]
fn suggest_returns_none_below_similarity_threshold() {
    let registry = common::get_base_registry();
    assert_eq!(registry.suggest("xyzzy_completely_unrelated"), None);
}

#[cfg(feature = "suggestions")]
#[test]
fn suggest_returns_the_close_candidate_above_threshold() {
    let registry = common::get_base_registry();
    assert_eq!(registry.suggest("verbos"), Some("verbose"));
}
