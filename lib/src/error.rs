//! Error types
//!
//! The parser recognizes two disjoint classes of failure. [`OptionsParsingError`] describes a
//! problem with user-supplied input and is always recoverable at the call site. [`InternalAssertion`]
//! describes a bug in the registered option schema (a cyclic or mis-declared expansion/implicit
//! requirement, or a schema binding failure) and should terminate the program.

use std::fmt;

/// A problem with user-supplied argument input
///
/// Every variant carries the offending token (or a reconstruction of it) for diagnostic
/// surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsParsingError {
    /// No option definition matched the given long or short form
    UnrecognizedOption {
        /// The token as it appeared on the command line
        token: String,
        /// A suggested alternative, if the `suggestions` feature found a close match
        suggestion: Option<String>,
    },
    /// A token beginning with `-` did not fit any recognized surface syntax
    InvalidSyntax(String),
    /// `--no<name>` was used where `<name>` does not resolve to a `bool` option
    IllegalNoPrefix(String),
    /// A value was supplied (e.g. `--flag=x`) for an option that takes none
    UnexpectedValue {
        /// Long name of the option
        name: String,
        /// The unexpected value
        value: String,
    },
    /// An option requiring a value was given with none available
    MissingValue(String),
    /// A wrapper option's value did not begin with `-`
    WrapperValueNotAnOption {
        /// Long name of the wrapper option
        name: String,
        /// The value that failed to qualify
        value: String,
    },
    /// Parsing the unwrapped token of a wrapper option left residue
    UnparsedAfterUnwrap(String),
}

impl fmt::Display for OptionsParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use OptionsParsingError::*;
        match self {
            UnrecognizedOption { token, suggestion: Some(s) } => {
                write!(f, "Unrecognized option '{}', did you mean '{}'?", token, s)
            },
            UnrecognizedOption { token, suggestion: None } => {
                write!(f, "Unrecognized option '{}'", token)
            },
            InvalidSyntax(tok) => write!(f, "Invalid option syntax: '{}'", tok),
            IllegalNoPrefix(name) => {
                write!(f, "Illegal use of 'no' prefix on non-boolean option '{}'", name)
            },
            UnexpectedValue { name, value } => {
                write!(f, "Option '{}' does not take a value (got '{}')", name, value)
            },
            MissingValue(name) => write!(f, "Expected value after option '{}'", name),
            WrapperValueNotAnOption { name, value } => {
                write!(f, "You may have meant --{}=--{}", name, value)
            },
            UnparsedAfterUnwrap(tok) => {
                write!(f, "Unparsed options remain after unwrapping '{}'", tok)
            },
        }
    }
}

impl std::error::Error for OptionsParsingError {}

/// A bug in the registered option schema, never a user-input problem
///
/// Encountering one of these means the program that registered the options is broken: an
/// expansion or implicit-requirement chain left residue, or schema binding failed for a field that
/// was supposed to have been validated at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalAssertion {
    /// Tokens produced by an expansion option were not fully consumed
    LeftoverAfterExpansion {
        /// Long name of the expansion option
        option: String,
        /// The tokens left over
        residue: Vec<String>,
    },
    /// Tokens produced by an implicit requirement were not fully consumed
    LeftoverAfterImplicitRequirement {
        /// Long name of the option that declared the requirement
        option: String,
        /// The tokens left over
        residue: Vec<String>,
    },
    /// A registered converter rejected a value it should have accepted (including a default)
    ConversionFailed {
        /// Long name of the option
        option: String,
        /// The value that failed to convert
        value: String,
        /// The converter's error message
        message: String,
    },
    /// No field binding exists in the `SchemaBinder` for a definition the caller asked about
    UnknownFieldBinding(String),
    /// A schema field setter rejected its value
    FieldSetFailed {
        /// Long name of the option
        option: String,
        /// The setter's error message
        message: String,
    },
}

impl fmt::Display for InternalAssertion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use InternalAssertion::*;
        match self {
            LeftoverAfterExpansion { option, residue } => {
                write!(f, "expansion of option '{}' left unparsed tokens: {:?}", option, residue)
            },
            LeftoverAfterImplicitRequirement { option, residue } => {
                write!(f, "implicit requirement declared by option '{}' left unparsed tokens: {:?}",
                    option, residue)
            },
            ConversionFailed { option, value, message } => {
                write!(f, "internal conversion failure for option '{}' (value '{}'): {}",
                    option, value, message)
            },
            UnknownFieldBinding(name) => {
                write!(f, "no schema field is bound to option '{}'", name)
            },
            FieldSetFailed { option, message } => {
                write!(f, "failed to set schema field for option '{}': {}", option, message)
            },
        }
    }
}

impl std::error::Error for InternalAssertion {}
