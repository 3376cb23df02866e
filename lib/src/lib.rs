//! A stateful, priority-aware command-line options parser for build-system tools, supporting
//! option expansion, implicit requirements and wrapper options, with a canonical, re-invocable
//! command line.
//!
//! Licensed under the MIT license or the Apache license, Version 2.0, at your option.
//!
//! # Documentation
//!
//! Unlike some crates which place most or all of their documentation up front at the root of their
//! crate, most of this crate's documentation is found within its submodules, including a dedicated
//! [documentation (`docs`) mod](docs/index.html).

#![deny(bare_trait_objects)]

#[cfg(feature = "suggestions")]
extern crate strsim;

mod canonical;
pub mod docs;
pub mod engine;
pub mod error;
mod matching;
pub mod recognizer;
pub mod registry;
pub mod schema;
pub mod value_store;

pub use canonical::CanonicalMultimap;
pub use engine::{ParseError, Parser};
pub use error::{InternalAssertion, OptionsParsingError};
pub use recognizer::SourceFn;
pub use registry::{OptionDefinition, OptionRegistry, RegistryBuilder, RegistryFlaw, ValueType};
pub use schema::SchemaBinder;
pub use value_store::{Origin, OptionValueDescription, ParsedOptionDescription};
