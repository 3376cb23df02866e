//! Value store components
//!
//! Holds, per option, the accumulated [`OptionValueDescription`] built up across however many
//! [`crate::engine::Parser::parse`] calls have been made, plus the ordered list of every
//! successfully recognized occurrence and the accumulated deprecation warnings.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::InternalAssertion;
use crate::registry::{OptionDefinition, ValueType};

/// Where a [`ParsedOptionDescription`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Caller-assigned trust tier; higher wins on conflicting singleton occurrences
    pub priority: i32,
    /// Human-readable provenance string (e.g. `"command line"`, `"config file foo.cfg"`)
    pub source: String,
    /// Long name of the option whose implicit requirement produced this occurrence, if any
    pub implicit_dependent: Option<String>,
    /// Long name of the expansion option this occurrence was expanded from, if any
    pub expanded_from: Option<String>,
}

impl Origin {
    /// An occurrence is explicit iff it has neither an implicit-dependent nor an expanded-from
    /// back-reference
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.implicit_dependent.is_none() && self.expanded_from.is_none()
    }
}

/// A single successfully recognized occurrence of an option
#[derive(Debug, Clone)]
pub struct ParsedOptionDescription {
    /// The matched definition
    pub definition: Arc<OptionDefinition>,
    /// Verbatim reconstructed form, e.g. `"--foo=bar"` or `"-f bar"`
    pub command_line_form: String,
    /// The value as it appeared on the command line, absent for nullary (`void`) options
    pub unconverted_value: Option<String>,
    /// Provenance
    pub origin: Origin,
}

impl ParsedOptionDescription {
    /// See [`Origin::is_explicit`]
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.origin.is_explicit()
    }
}

/// The accumulated value(s) recorded so far for one option
///
/// Modeled as a tagged variant rather than via inheritance, per this crate's existing preference
/// for plain enums over trait-object polymorphism where a closed set of cases is known up front.
#[derive(Debug, Clone)]
pub enum OptionValueDescription {
    /// A non-`allows_multiple` option: only the most recent occurrence is kept
    Singleton {
        /// Absent only for `void` options
        value: Option<String>,
        /// Provenance of the occurrence currently in effect
        origin: Origin,
    },
    /// An `allows_multiple` option: every occurrence, in insertion order
    Accumulating {
        /// One entry per occurrence
        entries: Vec<(Option<String>, Origin)>,
    },
    /// An expansion option was invoked; its own "value" is never schema-bound, only its expansions
    Expansion {
        /// Provenance of the (most recent) invocation
        origin: Origin,
    },
}

/// Converted, type-erased option value, ready for a schema setter
pub type ConvertedValue = Box<dyn Any + Send + Sync>;

fn convert_scalar(def: &OptionDefinition, raw: &str) -> Result<ConvertedValue, InternalAssertion> {
    match def.value_type {
        ValueType::Bool => Ok(Box::new(raw == "1")),
        ValueType::Void => Ok(Box::new(())),
        ValueType::Typed => {
            let converter = def.converter.as_ref()
                .expect("registry validation guarantees a converter for typed options");
            (converter)(raw).map_err(|message| InternalAssertion::ConversionFailed {
                option: def.long_name.clone(),
                value: raw.to_string(),
                message,
            })
        },
    }
}

impl OptionValueDescription {
    /// Round-trip the stored unconverted value(s) through the definition's converter
    ///
    /// For `Accumulating` descriptions this returns a `Vec<ConvertedValue>` boxed as a single
    /// `ConvertedValue`; callers that know the concrete element type downcast accordingly.
    pub fn get_value(&self, def: &OptionDefinition) -> Result<ConvertedValue, InternalAssertion> {
        match self {
            OptionValueDescription::Singleton { value, .. } => {
                let raw = value.as_deref().unwrap_or("");
                convert_scalar(def, raw)
            },
            OptionValueDescription::Accumulating { entries } => {
                let mut converted = Vec::with_capacity(entries.len());
                for (value, _) in entries {
                    let raw = value.as_deref().unwrap_or("");
                    converted.push(convert_scalar(def, raw)?);
                }
                Ok(Box::new(converted))
            },
            OptionValueDescription::Expansion { .. } => Ok(Box::new(())),
        }
    }
}

/// Holds every option's accumulated value and the warnings emitted so far
#[derive(Default)]
pub struct ValueStore {
    values: HashMap<String, OptionValueDescription>,
    /// Deprecation warnings, in the order the deprecated occurrences were encountered
    pub warnings: Vec<String>,
}

impl ValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully recognized occurrence
    ///
    /// Applies the combination rule appropriate to the definition (`allows_multiple` vs.
    /// singleton-overwrite vs. expansion-marker), and appends a deprecation warning if applicable.
    pub fn add_option_instance(&mut self, parsed: &ParsedOptionDescription) {
        let def = &parsed.definition;

        if def.is_deprecated() {
            let message = match &def.deprecation_warning {
                Some(text) => format!("Option '{}' is deprecated: {}", def.long_name, text),
                None => format!("Option '{}' is deprecated", def.long_name),
            };
            tracing::warn!(option = %def.long_name, "{}", message);
            self.warnings.push(message);
        }

        if def.is_expansion {
            self.values.insert(def.long_name.clone(), OptionValueDescription::Expansion {
                origin: parsed.origin.clone(),
            });
            return;
        }

        if def.allows_multiple {
            match self.values.get_mut(&def.long_name) {
                Some(OptionValueDescription::Accumulating { entries }) => {
                    entries.push((parsed.unconverted_value.clone(), parsed.origin.clone()));
                },
                _ => {
                    self.values.insert(def.long_name.clone(), OptionValueDescription::Accumulating {
                        entries: vec![(parsed.unconverted_value.clone(), parsed.origin.clone())],
                    });
                },
            }
        }
        else {
            self.values.insert(def.long_name.clone(), OptionValueDescription::Singleton {
                value: parsed.unconverted_value.clone(),
                origin: parsed.origin.clone(),
            });
        }
    }

    /// Fetch the value description recorded for a definition, if any
    #[inline]
    pub fn get(&self, long_name: &str) -> Option<&OptionValueDescription> {
        self.values.get(long_name)
    }

    /// Remove and return the value description recorded for a definition, if any
    #[inline]
    pub fn clear(&mut self, long_name: &str) -> Option<OptionValueDescription> {
        self.values.remove(long_name)
    }

    /// True if this option has at least one recorded occurrence
    #[inline]
    pub fn contains(&self, long_name: &str) -> bool {
        self.values.contains_key(long_name)
    }
}
