//! Documentation: Surface syntax
//!
//! Every token beginning with `-` is checked, in order, against the following forms. The first
//! that matches wins; a token matching none of them is an [`crate::error::OptionsParsingError::InvalidSyntax`].
//!
//!  * `-x` — a short option, boolean options taking this as "true".
//!  * `-x-` — a short *boolean* option explicitly negated ("false"). Using this suffix on a
//!    non-boolean short option is not a recognized form at all (falls through to the other cases).
//!  * `--name`, `--name=value` — a long option, by exact name or by unambiguous abbreviation (if
//!    abbreviation matching found more than one equally good candidate, this is an
//!    [`crate::error::OptionsParsingError::UnrecognizedOption`], not a silent pick).
//!  * `--noname` — the boolean negation of a long option named `name`. Using this prefix against a
//!    non-boolean option is an [`crate::error::OptionsParsingError::IllegalNoPrefix`]; supplying a
//!    value alongside it (`--noname=x`) is an [`crate::error::OptionsParsingError::UnexpectedValue`].
//!
//! A single leading dash can also introduce a long option (`-name`), if the parser was configured
//! with [`crate::engine::Parser::set_allow_single_dash_long`].
//!
//! A bare `--` stops recognition outright; every remaining token, including ones that look like
//! options, is returned as leftover.
//!
//! # Value acquisition
//!
//! Once a definition is resolved, its value is acquired according to its
//! [`crate::registry::ValueType`]:
//!
//!  * `Bool` — "1" if the occurrence was the non-negated form, "0" if negated; an inline `=value` is
//!    used verbatim instead when present.
//!  * `Void` (non-wrapper) — no value is acquired; supplying one inline is an error.
//!  * Everything else (`Typed`, or any `Void` that is also a *wrapper* option) — an inline `=value`
//!    is used if present, otherwise the next whole token is consumed as the value; if there is no
//!    next token, that's a [`crate::error::OptionsParsingError::MissingValue`].
//!
//! # Expansion, wrapper and implicit-requirement options
//!
//! An *expansion* option doesn't store a value for schema-binding purposes; instead its value (or
//! absence of one) is handed to the definition's `expansion_producer`, the resulting token list is
//! parsed recursively at the same priority, and the expansion option itself is elided from the
//! canonical command line (its expansions take its place).
//!
//! A *wrapper* option's acquired value must itself look like an option token (it must start with
//! `-`); that single token is re-parsed recursively at the same priority. A wrapper occurrence
//! never appears in the parsed-options list or the canonical command line at all — only the
//! unwrapped occurrence does.
//!
//! An option that declares `implicit_requirements` causes those tokens to be parsed, once, after
//! the rest of the current `parse` call's tokens have all been processed (deferred to the end of
//! the call, not interleaved with it). The resulting occurrences are marked as not explicit, and
//! are grouped after all other options when producing the canonical command line.
