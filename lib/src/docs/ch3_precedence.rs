//! Documentation: Priority, canonical form and provenance
//!
//! A [`crate::engine::Parser`] can be fed multiple argument lists, each via a separate
//! [`crate::engine::Parser::parse`] call at its own `priority`. For a non-`allows_multiple` option,
//! the most recently parsed occurrence always wins, regardless of the numeric priority attached to
//! either call — last write wins, full stop. Making that line up with trust tiers ("command line
//! should beat config file") is the caller's job: invoke `parse` in ascending priority order.
//! `priority` itself is recorded purely for the audit-trail views below to sort by; it plays no
//! part in deciding which occurrence's value is actually kept. `allows_multiple` options instead
//! accumulate every occurrence, across every `parse` call, in discovery order.
//!
//! # Canonical command line
//!
//! [`crate::engine::Parser::as_canonicalized_list`] renders the parser's current state back down
//! to a flat list of `--name=value` tokens, suitable as a cache key or for re-invoking a
//! sub-process with exactly the options now in effect:
//!
//!  * Expansion options never appear (only whatever they expanded to does).
//!  * Options that exist only because of an implicit requirement are grouped after every other
//!    option, in the order they were discovered.
//!  * Everything else sorts lexicographically by long option name.
//!
//! This canonical form is write-only: there is no supported path back from a canonical token list
//! into parser state other than feeding it through [`crate::engine::Parser::parse`] again like any
//! other argument list.
//!
//! # Provenance
//!
//! Every recognized occurrence carries a [`crate::value_store::Origin`]: the priority and source
//! description it was parsed at, plus (if applicable) which option's implicit requirement produced
//! it, or which expansion option it was expanded from. [`crate::engine::Parser::as_complete_list_of_parsed_options`]
//! and [`crate::engine::Parser::as_list_of_explicit_options`] expose this full audit trail, in
//! priority order.
