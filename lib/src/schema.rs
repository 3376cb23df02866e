//! Schema binder
//!
//! Outside of this module, the core never knows what concrete Rust type a `Typed` option's value
//! converts to — that's handled opaquely via `Box<dyn Any + Send + Sync>`. A [`SchemaBinder`] is
//! where a caller registers, per long name, a setter closure that knows how to downcast that boxed
//! value onto a field of its own result struct `S`. Binding reflection/codegen (deriving a
//! `SchemaBinder` from a struct's attributes) is out of scope for this core; callers wire it up by
//! hand, same as they hand-register [`crate::registry::OptionDefinition`]s.

use std::any::Any;
use std::sync::Arc;

use crate::engine::Parser;
use crate::error::InternalAssertion;
use crate::registry::OptionRegistry;

type Setter<S> = Arc<dyn Fn(&mut S, Box<dyn Any + Send + Sync>) -> Result<(), String> + Send + Sync>;

struct FieldBinding<S> {
    long_name: String,
    setter: Setter<S>,
}

/// A set of field setters bound to option long names, used to populate a caller's own result type
/// `S` from a [`Parser`]'s accumulated state
pub struct SchemaBinder<S> {
    bindings: Vec<FieldBinding<S>>,
}

impl<S> Default for SchemaBinder<S> {
    fn default() -> Self {
        Self { bindings: Vec::new() }
    }
}

impl<S: Default> SchemaBinder<S> {
    /// Create an empty binder
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `long_name`'s effective value to a field of `S` via `setter`
    ///
    /// `setter` receives the type-erased converted value (see [`crate::value_store::ConvertedValue`])
    /// and is responsible for downcasting it to whatever concrete type the matching
    /// [`crate::registry::OptionDefinition::converter`] actually produces.
    pub fn bind<F>(mut self, long_name: impl Into<String>, setter: F) -> Self
        where F: Fn(&mut S, Box<dyn Any + Send + Sync>) -> Result<(), String> + Send + Sync + 'static
    {
        self.bindings.push(FieldBinding { long_name: long_name.into(), setter: Arc::new(setter) });
        self
    }

    /// Populate a fresh `S` from `parser`'s effective values
    ///
    /// Every bound long name must exist in `registry`; an unbound definition is simply skipped
    /// (not every option needs a field in the caller's schema). Failures here are always
    /// [`InternalAssertion`]s: value conversion has already happened and succeeded by the time a
    /// [`Parser::parse`] call returns, so a setter rejecting its input means the binder itself was
    /// mis-wired.
    pub fn bind_into(&self, parser: &Parser, registry: &OptionRegistry) -> Result<S, InternalAssertion> {
        let mut result = S::default();
        for field in &self.bindings {
            let def = registry.by_long_name(&field.long_name)
                .ok_or_else(|| InternalAssertion::UnknownFieldBinding(field.long_name.clone()))?;
            // Effective value: the recorded one if this option was ever set, otherwise its
            // declared default, converted the same way a stored value would be.
            let desc = match parser.get_option_value_description(&field.long_name) {
                Some(d) => d.clone(),
                None => crate::value_store::OptionValueDescription::Singleton {
                    value: Some(def.default_value.clone()),
                    origin: crate::value_store::Origin {
                        priority: i32::MIN,
                        source: "<default>".to_string(),
                        implicit_dependent: None,
                        expanded_from: None,
                    },
                },
            };
            let converted = desc.get_value(def)?;
            (field.setter)(&mut result, converted).map_err(|message| InternalAssertion::FieldSetFailed {
                option: field.long_name.clone(),
                message,
            })?;
        }
        Ok(result)
    }
}
