//! Transformation-local value objects exchanged with the host object model.
//!
//! Descriptors are created fresh on every load and discarded once the host has
//! built its live objects from them; on save they are read-only views supplied
//! by the caller. They carry no identity beyond a single call.

use indexmap::IndexMap;

use crate::property::{PropertyValue, SharedValidator};

/// One named circuit: a set of placed components and a set of wires.
///
/// The order of `components` and `wires` carries no meaning and duplicates by
/// value are legal; `Vec` is implementation convenience only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircuitDescriptor {
    pub name: String,
    pub components: Vec<ComponentDescriptor>,
    pub wires: Vec<WireDescriptor>,
}

impl CircuitDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            wires: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: ComponentDescriptor) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_wire(mut self, wire: WireDescriptor) -> Self {
        self.wires.push(wire);
        self
    }
}

/// A placed component: which type to instantiate, where, and its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    pub class_name: String,
    pub x: i32,
    pub y: i32,
    /// Keyed by property name, insertion-ordered. Lookup is by name; the
    /// order itself is not semantically meaningful.
    pub properties: IndexMap<String, PropertyDescriptor>,
}

impl ComponentDescriptor {
    pub fn new(class_name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            class_name: class_name.into(),
            x,
            y,
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }
}

/// A single property: name, typed value, and (on the save path) the validator
/// that renders the value to its canonical string form.
///
/// Load leaves `validator` unset; the host attaches validators when it
/// constructs the typed component.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub value: PropertyValue,
    pub validator: Option<SharedValidator>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: SharedValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

// Equality is by content (name and value); the validator is a capability,
// not part of the property's identity.
impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

/// A wire segment on the grid.
///
/// Fields pass through load and save verbatim; `length` is not range-checked
/// at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireDescriptor {
    pub x: i32,
    pub y: i32,
    pub length: i32,
    pub is_horizontal: bool,
}

impl WireDescriptor {
    pub fn new(x: i32, y: i32, length: i32, is_horizontal: bool) -> Self {
        Self {
            x,
            y,
            length,
            is_horizontal,
        }
    }
}
