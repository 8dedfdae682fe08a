//! Schemas: the named "prototype" a materialized object is bound to.

use crate::object::PropertyDescriptor;

/// Describes what a materialized [`crate::Object`] looks like.
///
/// Fields not mentioned here are copied as plain data properties
/// ([`PropertyDescriptor::DATA`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    overrides: Vec<(String, PropertyDescriptor)>,
    required: Vec<String>,
}

impl Schema {
    /// An empty schema with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Give `name` a specific descriptor when it is materialized.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        let name = name.into();
        self.overrides.retain(|(existing, _)| *existing != name);
        self.overrides.push((name, descriptor));
        self
    }

    /// Require `name` to be present in the input.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    /// The schema name, reported by [`crate::Object::prototype`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields that must be present.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Fields with an explicit descriptor.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, PropertyDescriptor)> {
        self.overrides.iter().map(|(name, d)| (name.as_str(), *d))
    }

    /// Descriptor a decoded field called `name` receives.
    #[must_use]
    pub fn descriptor_for(&self, name: &str) -> PropertyDescriptor {
        self.overrides
            .iter()
            .find(|(field, _)| field == name)
            .map_or(PropertyDescriptor::DATA, |(_, d)| *d)
    }
}
