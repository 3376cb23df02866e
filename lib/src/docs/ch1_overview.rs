//! Documentation: Crate overview
//!
//! A build-system tool typically gathers its options from more than one place: a command line, one
//! or more config files, environment-derived defaults, and sometimes options injected by the tool
//! itself. This library was designed to *assist* such tools in combining all of those sources into
//! one consistent, replayable result.
//!
//! # Design
//!
//! The basic premise of usage is:
//!
//!  1. Describe the *options* available to your program via [`crate::registry::RegistryBuilder`],
//!     producing an immutable [`crate::registry::OptionRegistry`].
//!  2. Construct a [`crate::engine::Parser`] against that registry, then feed it one or more
//!     argument lists via repeated [`crate::engine::Parser::parse`] calls, each tagged with a
//!     *priority* (how trusted this source is) and a *source* function (how to describe where a
//!     given occurrence came from, for diagnostics).
//!  3. Query the parser's accumulated state: the effective value of any option, the full audit
//!     trail of every occurrence recognized so far, or the normalized *canonical* command line —
//!     useful as a stable cache key, or for re-invoking a sub-process with exactly the options that
//!     were in effect.
//!
//! Repeated `parse` calls do not simply concatenate; for a singleton option, the most recent call's
//! occurrence always overwrites an earlier call's. Keeping that call order aligned with the
//! priorities attached to each call is the caller's responsibility: parse built-in defaults first,
//! then a config file, then the literal command line, and the result reflects "command line beats
//! config file beats defaults" without the engine having to special-case the merge itself. The
//! `priority` tag recorded on each occurrence is used only by the audit-trail views, to produce a
//! stable sort — it does not itself decide which value wins.
//!
//! What it does not attempt to do includes: extracting an option schema from attributes or
//! reflection (schemas are registered by hand, via [`crate::registry::RegistryBuilder`]); data value
//! type conversion (a [`crate::registry::OptionDefinition::converter`] is supplied by the caller, not
//! derived); response-file expansion or help-text generation (those belong to a layer above this
//! core); diagnostic message localization; and interactive prompting. It avoids these to keep the
//! core's contract small and its behavior fully predictable from one parser state to the next.
//!
//! # Features
//!
//! <table>
//!     <thead>
//!         <tr><th>Feature</th><th>Supported/provided?</th></tr>
//!     </thead>
//!     <tbody>
//!         <tr><td>Priority-based multi-source merging</td><td>Yes</td></tr>
//!         <tr><td>Long, short, negated-boolean and no-prefix surface forms</td><td>Yes</td></tr>
//!         <tr><td>Option expansion (one option textually expands to others)</td><td>Yes</td></tr>
//!         <tr><td>Implicit requirements (one option's presence implies another)</td><td>Yes</td></tr>
//!         <tr><td>Wrapper options (a value that is itself a re-parsed option token)</td><td>Yes</td></tr>
//!         <tr><td>Canonical command-line reconstruction</td><td>Yes</td></tr>
//!         <tr><td>Full provenance/audit trail per occurrence</td><td>Yes</td></tr>
//!         <tr><td>Abbreviated long option name matching</td><td>Yes (optional)</td></tr>
//!         <tr><td>Mismatch ("did you mean") suggestions</td><td>Yes*, for unrecognized long options</td></tr>
//!         <tr><td>Dynamic 'builder' style registry construction</td><td>Yes</td></tr>
//!         <tr><td>Typed schema binding</td><td>Yes, via [`crate::schema::SchemaBinder`]</td></tr>
//!         <tr><td>Response files / top-level CLI framing</td><td>Not provided, out of scope</td></tr>
//!         <tr><td>Help/usage text generation</td><td>Not provided, out of scope</td></tr>
//!         <tr><td>Diagnostic localization</td><td>Not provided, out of scope</td></tr>
//!     </tbody>
//! </table>
//!
//! *Optional feature, controlled via the `Cargo` feature `suggestions`
