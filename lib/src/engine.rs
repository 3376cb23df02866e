//! The stateful parse engine
//!
//! [`Parser`] is the entry point: construct one from an [`OptionRegistry`], then feed it one or
//! more token lists via repeated calls to [`Parser::parse`], each tagged with a priority and a
//! provenance-describing source function. A later call's occurrence of a singleton option always
//! overwrites an earlier call's; keeping that in line with the numeric priority each call was
//! tagged with is the caller's responsibility, not something this engine enforces — see the
//! crate-level documentation for the full precedence and surface-syntax model.

use std::fmt;
use std::sync::Arc;

use crate::canonical::CanonicalMultimap;
use crate::error::{InternalAssertion, OptionsParsingError};
use crate::recognizer::{self, SourceFn};
use crate::registry::OptionRegistry;
use crate::value_store::{ParsedOptionDescription, ValueStore};

/// Either class of failure a [`Parser::parse`] call can produce
///
/// Kept as a single combined type at this one boundary (rather than two separate `Result`s)
/// because both classes can surface from the same call and the caller needs to tell them apart
/// to decide whether to report the problem to the user or treat it as a program bug.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// A problem with the user-supplied tokens
    User(OptionsParsingError),
    /// A bug in the registered option schema
    Internal(InternalAssertion),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::User(e) => e.fmt(f),
            ParseError::Internal(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<OptionsParsingError> for ParseError {
    fn from(e: OptionsParsingError) -> Self {
        ParseError::User(e)
    }
}

impl From<InternalAssertion> for ParseError {
    fn from(e: InternalAssertion) -> Self {
        ParseError::Internal(e)
    }
}

type ArgsPreprocessor = Arc<dyn Fn(&[String]) -> Result<Vec<String>, OptionsParsingError> + Send + Sync>;

fn identity_preprocessor() -> ArgsPreprocessor {
    Arc::new(|args| Ok(args.to_vec()))
}

/// Accumulated parser state across however many [`Parser::parse`] calls have been made
pub struct Parser {
    pub(crate) registry: OptionRegistry,
    pub(crate) allow_single_dash_long: bool,
    args_preprocessor: ArgsPreprocessor,
    pub(crate) value_store: ValueStore,
    pub(crate) parsed_options: Vec<ParsedOptionDescription>,
    pub(crate) canonical: CanonicalMultimap,
}

impl Parser {
    /// Create a new parser against a fixed option registry
    pub fn new(registry: OptionRegistry) -> Self {
        Self {
            registry,
            allow_single_dash_long: false,
            args_preprocessor: identity_preprocessor(),
            value_store: ValueStore::new(),
            parsed_options: Vec::new(),
            canonical: CanonicalMultimap::new(),
        }
    }

    /// Allow a single dash to introduce a long option, e.g. `-flag` in addition to `--flag`
    pub fn set_allow_single_dash_long(&mut self, allow: bool) {
        self.allow_single_dash_long = allow;
    }

    /// Install a hook run over every token list before recognition, e.g. to strip comments from a
    /// config-file-sourced argument list
    pub fn set_args_preprocessor<F>(&mut self, f: F)
        where F: Fn(&[String]) -> Result<Vec<String>, OptionsParsingError> + Send + Sync + 'static
    {
        self.args_preprocessor = Arc::new(f);
    }

    /// The accumulated value store
    pub fn value_store(&self) -> &ValueStore {
        &self.value_store
    }

    /// The warnings accumulated across every `parse` call so far (e.g. deprecation notices)
    pub fn warnings(&self) -> &[String] {
        &self.value_store.warnings
    }

    /// The option registry this parser was constructed against
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Parse `args` at the given `priority`, tagging every resulting occurrence's provenance via
    /// `source`
    ///
    /// Returns the leftover non-option tokens (everything before the first unrecognized
    /// non-dash-prefixed token, and everything after a bare `--`). Safe to call repeatedly, at
    /// different priorities, against the same parser; see the crate-level precedence rules.
    #[tracing::instrument(level = "debug", skip(self, source, args))]
    pub fn parse(&mut self, priority: i32, source: SourceFn, args: &[String])
        -> Result<Vec<String>, ParseError>
    {
        let leftover = self.parse_internal(priority, &source, None, None, args)?;
        self.validate_effective_values()?;
        Ok(leftover)
    }

    fn parse_internal(&mut self, priority: i32, source: &SourceFn, implicit_dependent: Option<String>,
        expanded_from: Option<String>, args: &[String]) -> Result<Vec<String>, ParseError>
    {
        let args = (self.args_preprocessor)(args)?;
        let mut leftover = Vec::new();
        let mut deferred_implicit: Vec<(Arc<crate::registry::OptionDefinition>, Vec<String>)> = Vec::new();

        let mut iter = args.iter();
        while let Some(tok) = iter.next() {
            if tok == "--" {
                leftover.extend(iter.by_ref().cloned());
                break;
            }
            if !tok.starts_with('-') || tok.len() == 1 {
                leftover.push(tok.clone());
                continue;
            }

            let parsed = recognizer::recognize(tok, &mut iter, priority, source,
                implicit_dependent.clone(), expanded_from.clone(), &self.registry,
                self.allow_single_dash_long)?;

            let def = parsed.definition.clone();
            self.value_store.add_option_instance(&parsed);

            if def.is_wrapper {
                let value = parsed.unconverted_value.clone().unwrap_or_default();
                if !value.starts_with('-') {
                    return Err(ParseError::User(OptionsParsingError::WrapperValueNotAnOption {
                        name: def.long_name.clone(),
                        value,
                    }));
                }
                let wrapped_name = def.long_name.clone();
                let nested_source: SourceFn =
                    Arc::new(move |_| format!("Unwrapped from wrapper option --{}", wrapped_name));
                let span = tracing::debug_span!("unwrap_wrapper", option = %def.long_name);
                let _enter = span.enter();
                let residue = self.parse_internal(priority, &nested_source, None, None,
                    std::slice::from_ref(&value))?;
                if !residue.is_empty() {
                    return Err(ParseError::User(
                        OptionsParsingError::UnparsedAfterUnwrap(tok.clone())));
                }
                continue;
            }

            self.parsed_options.push(parsed.clone());
            self.canonical.record(parsed.clone());

            if def.is_expansion {
                let tokens = self.registry.evaluate_expansion(&def, parsed.unconverted_value.as_deref());
                let triggering_source = parsed.origin.source.clone();
                let expansion_name = def.long_name.clone();
                let nested_source: SourceFn = Arc::new(move |_| {
                    format!("expanded from option --{} [from {}]", expansion_name, triggering_source)
                });
                let span = tracing::debug_span!("expand", option = %def.long_name);
                let _enter = span.enter();
                let residue = self.parse_internal(priority, &nested_source, None,
                    Some(def.long_name.clone()), &tokens)?;
                if !residue.is_empty() {
                    return Err(InternalAssertion::LeftoverAfterExpansion {
                        option: def.long_name.clone(),
                        residue,
                    }.into());
                }
            }

            if !def.implicit_requirements.is_empty() {
                deferred_implicit.push((def.clone(), def.implicit_requirements.clone()));
            }
        }

        for (def, tokens) in deferred_implicit {
            let req_name = def.long_name.clone();
            let nested_source: SourceFn =
                Arc::new(move |_| format!("implicit requirement of option --{}", req_name));
            let span = tracing::debug_span!("implicit_requirement", option = %def.long_name);
            let _enter = span.enter();
            let residue = self.parse_internal(priority, &nested_source, Some(def.long_name.clone()),
                None, &tokens)?;
            if !residue.is_empty() {
                return Err(InternalAssertion::LeftoverAfterImplicitRequirement {
                    option: def.long_name.clone(),
                    residue,
                }.into());
            }
        }

        Ok(leftover)
    }

    /// Round-trip every registered definition's effective value through its converter, surfacing
    /// any conversion failure (including of a bad default) as an [`InternalAssertion`]
    fn validate_effective_values(&self) -> Result<(), InternalAssertion> {
        for def in self.registry.all() {
            let desc = self.value_store.get(&def.long_name);
            match desc {
                Some(d) => { d.get_value(def)?; },
                None => {
                    crate::value_store::OptionValueDescription::Singleton {
                        value: Some(def.default_value.clone()),
                        origin: crate::value_store::Origin {
                            priority: i32::MIN,
                            source: "<default>".to_string(),
                            implicit_dependent: None,
                            expanded_from: None,
                        },
                    }.get_value(def)?;
                },
            }
        }
        Ok(())
    }

    /// Remove every trace of an option from this parser's state, as if it had never been parsed
    pub fn clear(&mut self, long_name: &str) {
        self.value_store.clear(long_name);
        self.canonical.clear(long_name);
        self.parsed_options.retain(|p| p.definition.long_name != long_name);
    }
}
