//! Materialized objects with per-property descriptors.

use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::ObjectError;

/// Metadata carried by each property of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    /// Listed by [`Object::keys`] and included when serialized.
    pub enumerable: bool,
    /// May be reassigned with [`Object::set`].
    pub writable: bool,
    /// May be removed or redefined.
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// A plain data property, as produced by decoding JSON.
    pub const DATA: Self = Self {
        enumerable: true,
        writable: true,
        configurable: true,
    };

    /// Visible but frozen.
    pub const READ_ONLY: Self = Self {
        enumerable: true,
        writable: false,
        configurable: false,
    };

    /// Writable but left out of `keys()` and serialization.
    pub const HIDDEN: Self = Self {
        enumerable: false,
        writable: true,
        configurable: true,
    };
}

impl Default for PropertyDescriptor {
    fn default() -> Self {
        Self::DATA
    }
}

/// A single property: its value and descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The stored value.
    pub value: Value,
    /// The property's metadata.
    pub descriptor: PropertyDescriptor,
}

/// A decoded object bound to a named prototype.
///
/// Properties keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    prototype: String,
    properties: Vec<(String, Property)>,
}

impl Object {
    /// An object with no properties bound to `prototype`.
    #[must_use]
    pub fn new(prototype: impl Into<String>) -> Self {
        Self {
            prototype: prototype.into(),
            properties: Vec::new(),
        }
    }

    /// Name of the schema this object was built from.
    #[must_use]
    pub fn prototype(&self) -> &str {
        &self.prototype
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|(key, _)| key == name)
    }

    /// Define (or redefine) a property with an explicit descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::NotConfigurable`] if `name` already exists and
    /// is not configurable.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: Value,
        descriptor: PropertyDescriptor,
    ) -> Result<(), ObjectError> {
        let name = name.into();
        let property = Property { value, descriptor };
        match self.position(&name) {
            Some(i) if !self.properties[i].1.descriptor.configurable => {
                Err(ObjectError::NotConfigurable { field: name })
            }
            Some(i) => {
                self.properties[i].1 = property;
                Ok(())
            }
            None => {
                self.properties.push((name, property));
                Ok(())
            }
        }
    }

    /// Value of the property `name`, enumerable or not.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.property(name).map(|p| &p.value)
    }

    /// The full property `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.position(name).map(|i| &self.properties[i].1)
    }

    /// Descriptor of the property `name`.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<PropertyDescriptor> {
        self.property(name).map(|p| p.descriptor)
    }

    /// Whether the object has a property `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Assign `value` to `name`. A new name becomes a plain data property.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::ReadOnly`] if the property exists and is not
    /// writable.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Result<(), ObjectError> {
        let name = name.into();
        match self.position(&name) {
            Some(i) => {
                let property = &mut self.properties[i].1;
                if !property.descriptor.writable {
                    return Err(ObjectError::ReadOnly { field: name });
                }
                property.value = value;
            }
            None => self.properties.push((
                name,
                Property {
                    value,
                    descriptor: PropertyDescriptor::DATA,
                },
            )),
        }
        Ok(())
    }

    /// Remove `name`, returning its value if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::NotConfigurable`] if the property is not
    /// configurable.
    pub fn remove(&mut self, name: &str) -> Result<Option<Value>, ObjectError> {
        let Some(i) = self.position(name) else {
            return Ok(None);
        };
        if !self.properties[i].1.descriptor.configurable {
            return Err(ObjectError::NotConfigurable {
                field: name.to_string(),
            });
        }
        Ok(Some(self.properties.remove(i).1.value))
    }

    /// Names of the enumerable properties, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.enumerable().map(|(key, _)| key)
    }

    fn enumerable(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .filter(|(_, p)| p.descriptor.enumerable)
            .map(|(key, p)| (key.as_str(), &p.value))
    }

    /// Total number of properties, including non-enumerable ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The enumerable properties as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .enumerable()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        Value::Object(map)
    }

    /// Rebind the object to a Rust type, e.g. [`crate::Rectangle`].
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Mismatch`] if the enumerable properties do not
    /// deserialize into `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ObjectError> {
        serde_json::from_value(self.to_value()).map_err(ObjectError::Mismatch)
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.enumerable() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
