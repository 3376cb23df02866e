mod common;

use buildopts::{Parser, SchemaBinder};

use common::{fixed_source, get_base_registry};

#[derive(Default, Debug, PartialEq, Eq)]
struct Settings {
    verbose: bool,
    name: String,
    core_library: bool,
    allow_empty_bootclasspath: bool,
}

fn binder() -> SchemaBinder<Settings> {
    SchemaBinder::new()
        .bind("verbose", |s: &mut Settings, v| {
            s.verbose = *v.downcast::<bool>().map_err(|_| "expected bool".to_string())?;
            Ok(())
        })
        .bind("name", |s, v| {
            s.name = *v.downcast::<String>().map_err(|_| "expected String".to_string())?;
            Ok(())
        })
        .bind("core_library", |s, v| {
            v.downcast::<()>().map_err(|_| "expected void".to_string())?;
            s.core_library = true;
            Ok(())
        })
        .bind("allow_empty_bootclasspath", |s, v| {
            v.downcast::<()>().map_err(|_| "expected void".to_string())?;
            s.allow_empty_bootclasspath = true;
            Ok(())
        })
}

#[test]
fn unset_fields_fall_back_to_the_registered_default() {
    let registry = get_base_registry();
    let parser = Parser::new(registry.clone());
    let settings = binder().bind_into(&parser, &registry).unwrap();
    assert_eq!(settings.name, "anonymous");
    assert!(!settings.verbose);
}

#[test]
fn explicit_fields_override_the_default() {
    let registry = get_base_registry();
    let mut parser = Parser::new(registry.clone());
    parser.parse(0, fixed_source("cli"), &args!["--verbose", "--name=bob"]).unwrap();
    let settings = binder().bind_into(&parser, &registry).unwrap();
    assert_eq!(settings.name, "bob");
    assert!(settings.verbose);
}

#[test]
fn implicitly_required_fields_are_populated_alongside_explicit_and_defaulted_ones() {
    let registry = get_base_registry();
    let mut parser = Parser::new(registry.clone());
    parser.parse(0, fixed_source("cli"), &args!["--core_library"]).unwrap();
    let settings = binder().bind_into(&parser, &registry).unwrap();
    assert!(settings.core_library);
    assert!(settings.allow_empty_bootclasspath);
    // A field this run never touched at all still falls back to its registered default.
    assert_eq!(settings.name, "anonymous");
}
