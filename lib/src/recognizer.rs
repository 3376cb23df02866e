//! The token recognizer
//!
//! Converts a single surface token, plus access to whatever tokens follow it, into a
//! [`ParsedOptionDescription`]. See the module-level parse engine documentation for how recognized
//! occurrences are then threaded through expansion, wrapper-unwrapping and implicit-requirement
//! handling.

use std::sync::Arc;

use crate::error::OptionsParsingError;
use crate::registry::{OptionDefinition, OptionRegistry, ValueType};
use crate::value_store::{Origin, ParsedOptionDescription};

/// Maps a resolved definition to a human-readable provenance string
pub type SourceFn = Arc<dyn Fn(&OptionDefinition) -> String + Send + Sync>;

/// Recognize one token (and possibly the next) as an option occurrence
///
/// `rest` is advanced by one element if a detached ("next argument") value is consumed.
#[allow(clippy::too_many_arguments)]
pub fn recognize<'a>(
    arg: &str,
    rest: &mut std::slice::Iter<'a, String>,
    priority: i32,
    source: &SourceFn,
    implicit_dependent: Option<String>,
    expanded_from: Option<String>,
    registry: &OptionRegistry,
    allow_single_dash_long: bool,
) -> Result<ParsedOptionDescription, OptionsParsingError> {
    let chars: Vec<char> = arg.chars().collect();

    // Case 1: short nullary/unary, e.g. `-x`
    if chars.len() == 2 && chars[0] == '-' && chars[1] != '-' {
        let ch = chars[1];
        let def = lookup_short(registry, ch, arg)?;
        return finish(def, arg.to_string(), true, None, rest, priority, source,
            implicit_dependent, expanded_from);
    }

    // Case 2: short boolean-negated, e.g. `-x-`
    if chars.len() == 3 && chars[0] == '-' && chars[1] != '-' && chars[2] == '-' {
        let ch = chars[1];
        let def = lookup_short(registry, ch, arg)?;
        return finish(def, arg.to_string(), false, None, rest, priority, source,
            implicit_dependent, expanded_from);
    }

    // Case 3: long form
    let prefix_len = if arg.starts_with("--") {
        Some(2)
    } else if allow_single_dash_long && arg.starts_with('-') {
        Some(1)
    } else {
        None
    };

    if let Some(prefix_len) = prefix_len {
        let body = &arg[prefix_len..];
        let (name, inline_value) = match body.find('=') {
            Some(i) => (&body[..i], Some(&body[i + 1..])),
            None => (body, None),
        };

        if name.is_empty() {
            return Err(OptionsParsingError::InvalidSyntax(arg.to_string()));
        }

        let def = match crate::matching::find_name_match(
            name, registry.all(), |d| d.long_name.as_str(), true,
        ) {
            Err(()) => return Err(unrecognized(registry, arg)),
            Ok(Some(def)) if !def.is_internal => def.clone(),
            Ok(_) => {
                // Not found, or found but internal (hidden from user input): try the `no` prefix.
                if let Some(stripped) = name.strip_prefix("no") {
                    if !stripped.is_empty() {
                        match crate::matching::find_name_match(
                            stripped, registry.all(), |d| d.long_name.as_str(), true,
                        ) {
                            Ok(Some(negated)) if !negated.is_internal => {
                                if negated.value_type != ValueType::Bool {
                                    return Err(OptionsParsingError::IllegalNoPrefix(
                                        stripped.to_string(),
                                    ));
                                }
                                if let Some(value) = inline_value {
                                    return Err(OptionsParsingError::UnexpectedValue {
                                        name: negated.long_name.clone(),
                                        value: value.to_string(),
                                    });
                                }
                                return finish(negated.clone(), arg.to_string(), false, None,
                                    rest, priority, source, implicit_dependent, expanded_from);
                            },
                            _ => return Err(unrecognized(registry, arg)),
                        }
                    }
                }
                return Err(unrecognized(registry, arg));
            },
        };

        return finish(def, arg.to_string(), true, inline_value.map(str::to_string), rest,
            priority, source, implicit_dependent, expanded_from);
    }

    Err(OptionsParsingError::InvalidSyntax(arg.to_string()))
}

fn lookup_short(registry: &OptionRegistry, ch: char, arg: &str)
    -> Result<Arc<OptionDefinition>, OptionsParsingError>
{
    match registry.by_abbrev(ch) {
        Some(def) if !def.is_internal => Ok(def.clone()),
        _ => Err(OptionsParsingError::UnrecognizedOption {
            token: arg.to_string(),
            suggestion: None,
        }),
    }
}

#[cfg(feature = "suggestions")]
fn unrecognized(registry: &OptionRegistry, arg: &str) -> OptionsParsingError {
    let name = arg.trim_start_matches('-');
    OptionsParsingError::UnrecognizedOption {
        token: arg.to_string(),
        suggestion: registry.suggest(name).map(str::to_string),
    }
}

#[cfg(not(feature = "suggestions"))]
fn unrecognized(_registry: &OptionRegistry, arg: &str) -> OptionsParsingError {
    OptionsParsingError::UnrecognizedOption { token: arg.to_string(), suggestion: None }
}

/// Shared tail: given a resolved definition and whatever inline value was already extracted,
/// acquire the option's value (if any) and build the `ParsedOptionDescription`.
#[allow(clippy::too_many_arguments)]
fn finish<'a>(
    def: Arc<OptionDefinition>,
    mut command_line_form: String,
    boolean_value: bool,
    mut unconverted_value: Option<String>,
    rest: &mut std::slice::Iter<'a, String>,
    priority: i32,
    source: &SourceFn,
    implicit_dependent: Option<String>,
    expanded_from: Option<String>,
) -> Result<ParsedOptionDescription, OptionsParsingError> {
    if unconverted_value.is_none() {
        unconverted_value = match def.value_type {
            ValueType::Bool => Some(if boolean_value { "1" } else { "0" }.to_string()),
            ValueType::Void if !def.is_wrapper => None,
            _ => match rest.next() {
                Some(tok) => {
                    command_line_form.push(' ');
                    command_line_form.push_str(tok);
                    Some(tok.clone())
                },
                None => return Err(OptionsParsingError::MissingValue(def.long_name.clone())),
            },
        };
    }
    else if let Some(value) = unconverted_value.clone() {
        if def.value_type != ValueType::Bool && def.value_type != ValueType::Typed
            && !def.is_wrapper
        {
            // A void, non-wrapper option was given an inline value it cannot accept.
            return Err(OptionsParsingError::UnexpectedValue { name: def.long_name.clone(), value });
        }
    }

    let origin = Origin {
        priority,
        source: source(&def),
        implicit_dependent,
        expanded_from,
    };

    Ok(ParsedOptionDescription { definition: def, command_line_form, unconverted_value, origin })
}
