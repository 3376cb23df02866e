//! Option metadata registry
//!
//! This module contains components describing the set of options "available" for a given parser
//! to match against. [`OptionDefinition`] is the unit of description; [`RegistryBuilder`] is the
//! "extendible" side used to assemble a set; [`OptionRegistry`] is the immutable, queryable result,
//! analogous in spirit to this crate's option-set pair (`OptionSetEx`/`OptionSet`).

use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[cfg(feature = "suggestions")]
use crate::matching;

/// The kind of value an option carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// A boolean flag (`--foo` / `--nofoo`)
    Bool,
    /// A nullary flag carrying no value at all
    Void,
    /// A value whose type is opaque to the core; resolved by a registered converter
    Typed,
}

/// A converter from the unconverted string form of a value to its typed form
///
/// Opaque to the core: the core only ever calls this to surface type errors uniformly (including
/// for default values), never to interpret the result itself.
pub type ConvertFn =
    Arc<dyn Fn(&str) -> Result<Box<dyn Any + Send + Sync>, String> + Send + Sync>;

/// A producer of the token list an expansion option textually expands to
pub type ExpansionFn = Arc<dyn Fn(Option<&str>) -> Vec<String> + Send + Sync>;

/// Description of a single available option
///
/// Immutable once placed in an [`OptionRegistry`].
pub struct OptionDefinition {
    /// Long name, unique within the registry, excluding the `--` prefix
    pub long_name: String,
    /// Optional single-char abbreviation, excluding the `-` prefix
    pub abbrev: Option<char>,
    /// The kind of value this option carries
    pub value_type: ValueType,
    /// Converter used to resolve `Typed` values; required when `value_type == ValueType::Typed`
    pub converter: Option<ConvertFn>,
    /// String form of the default value, used when the option was never set
    pub default_value: String,
    /// If true, repeated occurrences accumulate into an ordered list instead of overwriting
    pub allows_multiple: bool,
    /// If true, the option's presence expands to further argument tokens
    pub is_expansion: bool,
    /// Producer of the expansion token list; required when `is_expansion` is true
    pub expansion_producer: Option<ExpansionFn>,
    /// Tokens re-injected, as if supplied by an unseen caller, whenever this option is set
    pub implicit_requirements: Vec<String>,
    /// If true, this option's value is itself a full argument token, re-parsed at the same priority
    pub is_wrapper: bool,
    /// If true, this option exists in the registry but is hidden from user-supplied input
    pub is_internal: bool,
    /// Non-empty when this option is deprecated and carries an explanatory message
    pub deprecation_warning: Option<String>,
    /// True when this option is deprecated with no specific explanatory message
    pub deprecated_marker: bool,
    /// Opaque metadata tags
    pub metadata_tags: BTreeSet<String>,
    /// Opaque help text
    pub help: Option<String>,
    /// Opaque category label
    pub category: Option<String>,
}

impl OptionDefinition {
    /// True if this definition carries a non-empty deprecation message or the deprecated marker
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated_marker || self.deprecation_warning.is_some()
    }
}

impl std::fmt::Debug for OptionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("OptionDefinition")
            .field("long_name", &self.long_name)
            .field("abbrev", &self.abbrev)
            .field("value_type", &self.value_type)
            .field("default_value", &self.default_value)
            .field("allows_multiple", &self.allows_multiple)
            .field("is_expansion", &self.is_expansion)
            .field("implicit_requirements", &self.implicit_requirements)
            .field("is_wrapper", &self.is_wrapper)
            .field("is_internal", &self.is_internal)
            .finish_non_exhaustive()
    }
}

/// A flaw found while validating a [`RegistryBuilder`]
///
/// Mirrors the `OptionFlaw`/`CommandFlaw` pattern already used elsewhere in this crate for
/// reporting option and command set validation problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryFlaw {
    /// Long option name is an empty string
    EmptyLongName,
    /// Duplicate long option name
    DuplicateLongName(String),
    /// Duplicate short option abbreviation
    DuplicateAbbrev(char),
    /// A definition was marked both `is_expansion` and `is_wrapper`
    ExpansionAndWrapper(String),
    /// An expansion option is missing its `expansion_producer`
    ExpansionMissingProducer(String),
    /// A `Typed` option is missing its `converter`
    TypedMissingConverter(String),
}

/// Builder used to assemble an [`OptionRegistry`]
///
/// Validation is performed at [`build`](Self::build) time, mirroring `OptionSetEx::validate`.
#[derive(Default)]
pub struct RegistryBuilder {
    definitions: Vec<OptionDefinition>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { definitions: Vec::new() }
    }

    /// Add a definition
    ///
    /// No validation is performed here; a definition that is simultaneously `is_expansion` and
    /// `is_wrapper`, or otherwise flawed, is accepted and only surfaced later by
    /// [`validate`](Self::validate) or [`build`](Self::build).
    pub fn add(mut self, def: OptionDefinition) -> Self {
        self.definitions.push(def);
        self
    }

    /// Validate the accumulated definitions, returning every flaw found
    pub fn validate(&self) -> Result<(), Vec<RegistryFlaw>> {
        let mut flaws = Vec::new();
        let mut seen_names: BTreeSet<&str> = BTreeSet::new();
        let mut seen_abbrevs: BTreeSet<char> = BTreeSet::new();

        for def in &self.definitions {
            if def.long_name.is_empty() {
                flaws.push(RegistryFlaw::EmptyLongName);
            }
            else if !seen_names.insert(&def.long_name) {
                flaws.push(RegistryFlaw::DuplicateLongName(def.long_name.clone()));
            }
            if let Some(ch) = def.abbrev {
                if !seen_abbrevs.insert(ch) {
                    flaws.push(RegistryFlaw::DuplicateAbbrev(ch));
                }
            }
            if def.is_expansion && def.is_wrapper {
                flaws.push(RegistryFlaw::ExpansionAndWrapper(def.long_name.clone()));
            }
            if def.is_expansion && def.expansion_producer.is_none() {
                flaws.push(RegistryFlaw::ExpansionMissingProducer(def.long_name.clone()));
            }
            if def.value_type == ValueType::Typed && def.converter.is_none() {
                flaws.push(RegistryFlaw::TypedMissingConverter(def.long_name.clone()));
            }
        }

        match flaws.is_empty() {
            true => Ok(()),
            false => Err(flaws),
        }
    }

    /// Finalize the registry
    ///
    /// Panics (debug only) if validation finds any flaw; see [`validate`](Self::validate) for a
    /// non-panicking check.
    pub fn build(self) -> OptionRegistry {
        debug_assert!(self.validate().is_ok(), "invalid option registry: {:?}", self.validate());

        let mut by_name = HashMap::with_capacity(self.definitions.len());
        let mut by_abbrev = HashMap::new();
        let definitions: Vec<Arc<OptionDefinition>> =
            self.definitions.into_iter().map(Arc::new).collect();

        for (idx, def) in definitions.iter().enumerate() {
            by_name.insert(def.long_name.clone(), idx);
            if let Some(ch) = def.abbrev {
                by_abbrev.insert(ch, idx);
            }
        }

        OptionRegistry { definitions, by_name, by_abbrev }
    }
}

/// An immutable, queryable set of option definitions
///
/// Thread-safe for reads; may be shared across parsers.
#[derive(Clone)]
pub struct OptionRegistry {
    definitions: Vec<Arc<OptionDefinition>>,
    by_name: HashMap<String, usize>,
    by_abbrev: HashMap<char, usize>,
}

impl OptionRegistry {
    /// Look up a definition by its long name
    #[inline]
    pub fn by_long_name(&self, name: &str) -> Option<&Arc<OptionDefinition>> {
        self.by_name.get(name).map(|&idx| &self.definitions[idx])
    }

    /// Look up a definition by its single-char abbreviation
    #[inline]
    pub fn by_abbrev(&self, ch: char) -> Option<&Arc<OptionDefinition>> {
        self.by_abbrev.get(&ch).map(|&idx| &self.definitions[idx])
    }

    /// Enumerate all registered definitions
    #[inline]
    pub fn all(&self) -> impl Iterator<Item = &Arc<OptionDefinition>> {
        self.definitions.iter()
    }

    /// Compute the expansion token list for an expansion option
    ///
    /// Panics (debug only) if `def` is not an expansion option.
    pub fn evaluate_expansion(&self, def: &OptionDefinition, value: Option<&str>) -> Vec<String> {
        debug_assert!(def.is_expansion, "'{}' is not an expansion option", def.long_name);
        (def.expansion_producer.as_ref().expect("expansion option missing producer"))(value)
    }

    /// Suggest the closest non-internal long option name to an unrecognized one
    ///
    /// Uses the `jaro_winkler` algorithm, filtering out any candidate scoring below `0.8`, exactly
    /// as `OptionSet::suggest` does for unknown long options elsewhere in this crate.
    #[cfg(feature = "suggestions")]
    pub fn suggest(&self, unknown: &str) -> Option<&str> {
        matching::suggest(
            unknown,
            self.definitions.iter().filter(|d| !d.is_internal),
            |d| d.long_name.as_str(),
        )
    }
}
