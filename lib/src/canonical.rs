//! Canonicalizer & query components
//!
//! Everything here is read-only with respect to parser state (aside from [`Parser::preview`],
//! which runs a throwaway nested parser rather than mutating `self`).

use std::sync::Arc;

use crate::engine::{ParseError, Parser};
use crate::error::InternalAssertion;
use crate::recognizer::SourceFn;
use crate::registry::OptionDefinition;
use crate::value_store::{Origin, OptionValueDescription, ParsedOptionDescription};

/// An ordered multimap from option long name to its canonical occurrences
///
/// A plain `Vec` plus linear scans suffices at the scale this parser operates at (tens to low
/// hundreds of options); it trivially preserves insertion order, including across the
/// replace-all-for-key operation singleton options require.
#[derive(Default, Clone)]
pub struct CanonicalMultimap {
    entries: Vec<ParsedOptionDescription>,
}

impl CanonicalMultimap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a newly recognized occurrence, honoring `allows_multiple`
    pub(crate) fn record(&mut self, parsed: ParsedOptionDescription) {
        if !parsed.definition.allows_multiple {
            let name = &parsed.definition.long_name;
            self.entries.retain(|p| &p.definition.long_name != name);
        }
        self.entries.push(parsed);
    }

    /// Remove every entry for the given option
    pub(crate) fn clear(&mut self, long_name: &str) {
        self.entries.retain(|p| p.definition.long_name != long_name);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ParsedOptionDescription> {
        self.entries.iter()
    }
}

fn synthetic_default_origin() -> Origin {
    Origin { priority: i32::MIN, source: "<default>".to_string(), implicit_dependent: None,
        expanded_from: None }
}

impl Parser {
    /// All parsed occurrences (including implicit/expanded ones), stably sorted by priority
    pub fn as_complete_list_of_parsed_options(&self) -> Vec<ParsedOptionDescription> {
        let mut list = self.parsed_options.clone();
        list.sort_by_key(|p| p.origin.priority);
        list
    }

    /// Only the occurrences that are explicit (neither implicit nor expanded), sorted by priority
    pub fn as_list_of_explicit_options(&self) -> Vec<ParsedOptionDescription> {
        self.as_complete_list_of_parsed_options().into_iter().filter(|p| p.is_explicit()).collect()
    }

    /// The normalized, order-stable `--name=value` command line
    ///
    /// Expansion options are elided (only their expansions survive). Occurrences that exist
    /// because of an implicit requirement are grouped after all others, in insertion order; the
    /// rest sort lexicographically by long option name.
    pub fn as_canonicalized_list(&self) -> Vec<String> {
        let mut primary: Vec<&ParsedOptionDescription> = Vec::new();
        let mut trailing: Vec<&ParsedOptionDescription> = Vec::new();

        for entry in self.canonical.iter() {
            if entry.definition.is_expansion {
                continue;
            }
            if entry.origin.implicit_dependent.is_some() {
                trailing.push(entry);
            }
            else {
                primary.push(entry);
            }
        }
        primary.sort_by(|a, b| a.definition.long_name.cmp(&b.definition.long_name));

        primary.into_iter().chain(trailing)
            .map(|p| format!("--{}={}", p.definition.long_name, p.unconverted_value.as_deref().unwrap_or("")))
            .collect()
    }

    /// The effective value of every registered definition: its recorded value if set, otherwise a
    /// synthesized default-value description
    pub fn as_list_of_effective_options(&self) -> Vec<(Arc<OptionDefinition>, OptionValueDescription)> {
        self.registry.all().map(|def| {
            let desc = match self.value_store.get(&def.long_name) {
                Some(d) => d.clone(),
                None => OptionValueDescription::Singleton {
                    value: Some(def.default_value.clone()),
                    origin: synthetic_default_origin(),
                },
            };
            (def.clone(), desc)
        }).collect()
    }

    /// Whether `long_name` has at least one explicit occurrence
    pub fn contains_explicit(&self, long_name: &str) -> bool {
        self.parsed_options.iter().any(|p| p.definition.long_name == long_name && p.is_explicit())
    }

    /// The accumulated value description for `long_name`, if it was ever set
    pub fn get_option_value_description(&self, long_name: &str) -> Option<&OptionValueDescription> {
        self.value_store.get(long_name)
    }

    /// Preview what would happen if `long_name` were supplied with `value` at `priority`, without
    /// mutating `self` — runs a throwaway parser sharing this one's registry and settings.
    ///
    /// This pre-parses the definition's implicit requirements so callers can inspect the full
    /// chain of occurrences that would result.
    pub fn get_option_description(&self, long_name: &str, value: Option<&str>, priority: i32,
        source: SourceFn) -> Result<Vec<ParsedOptionDescription>, ParseError>
    {
        let def = self.registry.by_long_name(long_name)
            .ok_or_else(|| ParseError::Internal(InternalAssertion::UnknownFieldBinding(long_name.to_string())))?;
        let token = match value {
            Some(v) => format!("--{}={}", def.long_name, v),
            None => format!("--{}", def.long_name),
        };
        self.preview(&[token], priority, source)
    }

    /// Preview the occurrences an expansion option `def` would generate for `value`, at
    /// `priority`, without mutating `self`.
    pub fn get_expansion_option_value_descriptions(&self, def: &OptionDefinition, value: Option<&str>,
        priority: i32, source: SourceFn) -> Result<Vec<ParsedOptionDescription>, ParseError>
    {
        let tokens = self.registry.evaluate_expansion(def, value);
        self.preview(&tokens, priority, source)
    }

    fn preview(&self, tokens: &[String], priority: i32, source: SourceFn)
        -> Result<Vec<ParsedOptionDescription>, ParseError>
    {
        let mut scratch = Parser::new(self.registry.clone());
        scratch.allow_single_dash_long = self.allow_single_dash_long;
        scratch.parse(priority, source, tokens)?;
        Ok(scratch.parsed_options)
    }
}
