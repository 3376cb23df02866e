//! Playground program for the `buildopts` library
//!
//! Registers a handful of options exercising every feature of the core (a plain boolean, a typed
//! value, an `allows_multiple` option, an expansion option, a wrapper option, and an option
//! carrying an implicit requirement), parses the program's own command-line arguments against
//! them, and prints the canonical command line, the full audit trail, and any warnings.

use std::sync::Arc;

use buildopts::{OptionDefinition, ParseError, Parser, RegistryBuilder, ValueType};

fn void_def(long_name: &str, abbrev: Option<char>) -> OptionDefinition {
    OptionDefinition {
        long_name: long_name.to_string(),
        abbrev,
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

fn build_registry() -> buildopts::OptionRegistry {
    RegistryBuilder::new()
        .add(OptionDefinition {
            long_name: "verbose".to_string(),
            abbrev: Some('v'),
            value_type: ValueType::Bool,
            converter: None,
            default_value: "0".to_string(),
            ..void_def("verbose", Some('v'))
        })
        .add(OptionDefinition {
            long_name: "jobs".to_string(),
            abbrev: Some('j'),
            value_type: ValueType::Typed,
            converter: Some(Arc::new(|raw| {
                raw.parse::<u32>().map(|n| Box::new(n) as Box<dyn std::any::Any + Send + Sync>)
                    .map_err(|e| e.to_string())
            })),
            default_value: "1".to_string(),
            ..void_def("jobs", Some('j'))
        })
        .add(OptionDefinition {
            long_name: "define".to_string(),
            abbrev: Some('D'),
            value_type: ValueType::Typed,
            converter: Some(Arc::new(|raw| Ok(Box::new(raw.to_string())))),
            allows_multiple: true,
            ..void_def("define", Some('D'))
        })
        .add(OptionDefinition {
            long_name: "all".to_string(),
            is_expansion: true,
            expansion_producer: Some(Arc::new(|_| {
                vec!["--verbose".to_string(), "--jobs=8".to_string()]
            })),
            ..void_def("all", None)
        })
        .add(OptionDefinition {
            long_name: "flag".to_string(),
            is_wrapper: true,
            value_type: ValueType::Typed,
            converter: Some(Arc::new(|raw| Ok(Box::new(raw.to_string())))),
            ..void_def("flag", None)
        })
        .add(OptionDefinition {
            long_name: "core_library".to_string(),
            implicit_requirements: vec!["--allow_empty_bootclasspath".to_string()],
            ..void_def("core_library", None)
        })
        .add(void_def("allow_empty_bootclasspath", None))
        .build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = build_registry();
    let mut parser = Parser::new(registry);

    let args: Vec<String> = std::env::args().skip(1).collect();
    println!("[ Your input arguments ]\n");
    for (i, arg) in args.iter().enumerate() {
        println!("[{}]: {}", i, arg);
    }
    if args.is_empty() {
        println!("None!");
    }

    let source: buildopts::SourceFn = Arc::new(|_| "command line".to_string());
    match parser.parse(100, source, &args) {
        Ok(leftover) => {
            println!("\n[ Leftover (non-option) arguments ]\n");
            if leftover.is_empty() {
                println!("None!");
            }
            for arg in &leftover {
                println!("{}", arg);
            }
        },
        Err(ParseError::User(e)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        },
        Err(ParseError::Internal(e)) => {
            panic!("internal assertion failure (registered option schema is broken): {}", e);
        },
    }

    println!("\n[ Canonical command line ]\n");
    for token in parser.as_canonicalized_list() {
        println!("{}", token);
    }

    println!("\n[ Audit trail ]\n");
    for parsed in parser.as_complete_list_of_parsed_options() {
        println!("{} (explicit={}, priority={}, source={:?})", parsed.command_line_form,
            parsed.is_explicit(), parsed.origin.priority, parsed.origin.source);
    }

    if !parser.warnings().is_empty() {
        println!("\n[ Warnings ]\n");
        for warning in parser.warnings() {
            println!("{}", warning);
        }
    }
}
