//! Shared stuff

use std::sync::Arc;

use buildopts::{OptionDefinition, OptionRegistry, RegistryBuilder, SourceFn, ValueType};

pub fn base(long_name: &str) -> OptionDefinition {
    OptionDefinition {
        long_name: long_name.to_string(),
        abbrev: None,
        value_type: ValueType::Void,
        converter: None,
        default_value: String::new(),
        allows_multiple: false,
        is_expansion: false,
        expansion_producer: None,
        implicit_requirements: Vec::new(),
        is_wrapper: false,
        is_internal: false,
        deprecation_warning: None,
        deprecated_marker: false,
        metadata_tags: Default::default(),
        help: None,
        category: None,
    }
}

/// A registry exercising every feature: a boolean, a typed scalar, an `allows_multiple` typed
/// option, an expansion option, a wrapper option, an option with an implicit requirement, and a
/// hidden internal option.
pub fn get_base_registry() -> OptionRegistry {
    RegistryBuilder::new()
        .add(OptionDefinition {
            abbrev: Some('v'),
            value_type: ValueType::Bool,
            default_value: "0".to_string(),
            ..base("verbose")
        })
        .add(OptionDefinition {
            abbrev: Some('n'),
            value_type: ValueType::Typed,
            converter: Some(string_converter()),
            default_value: "anonymous".to_string(),
            ..base("name")
        })
        .add(OptionDefinition {
            abbrev: Some('D'),
            value_type: ValueType::Typed,
            converter: Some(string_converter()),
            allows_multiple: true,
            ..base("define")
        })
        .add(OptionDefinition {
            is_expansion: true,
            expansion_producer: Some(Arc::new(|_| {
                vec!["--verbose".to_string(), "--name=all".to_string()]
            })),
            ..base("all")
        })
        .add(OptionDefinition {
            is_wrapper: true,
            value_type: ValueType::Typed,
            converter: Some(string_converter()),
            ..base("wrap")
        })
        .add(OptionDefinition {
            implicit_requirements: vec!["--allow_empty_bootclasspath".to_string()],
            ..base("core_library")
        })
        .add(base("allow_empty_bootclasspath"))
        .add(OptionDefinition { is_internal: true, ..base("hidden") })
        .add(OptionDefinition {
            deprecation_warning: Some("use --name instead".to_string()),
            value_type: ValueType::Typed,
            converter: Some(string_converter()),
            ..base("old_name")
        })
        .build()
}

fn string_converter() -> Arc<dyn Fn(&str) -> Result<Box<dyn std::any::Any + Send + Sync>, String>
    + Send + Sync>
{
    Arc::new(|raw| Ok(Box::new(raw.to_string())))
}

/// A fixed-description source function, for tests where provenance text doesn't matter
pub fn fixed_source(description: &'static str) -> SourceFn {
    Arc::new(move |_| description.to_string())
}

/// Build a `Vec<String>` from string literals
#[macro_export]
macro_rules! args {
    ( $($e:expr),* $(,)? ) => { vec![ $($e.to_string()),* ] };
}
