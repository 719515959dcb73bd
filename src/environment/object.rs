use crate::value::Value;
use compact_str::{CompactString, ToCompactString};
use std::{collections::HashMap, rc::Rc};

/// A declared class. Property types are recorded but never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name: CompactString,
    properties: Vec<(CompactString, CompactString)>,
}

impl ClassDef {
    pub fn new(name: &str, declared: Vec<(CompactString, CompactString)>) -> Self {
        let mut properties: Vec<(CompactString, CompactString)> = Vec::new();
        for (property, kind) in declared {
            // A repeated property keeps its first position but takes the later type.
            match properties.iter_mut().find(|(name, _)| *name == property) {
                Some(entry) => entry.1 = kind,
                None => properties.push((property, kind)),
            }
        }
        Self {
            name: name.to_compact_string(),
            properties,
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, kind)| (name.as_str(), kind.as_str()))
    }

    pub fn property_type(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(property, _)| property == name)
            .map(|(_, kind)| kind.as_str())
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property_type(name).is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ObjectInstance {
    pub class: Rc<ClassDef>,
    fields: HashMap<CompactString, Value>,
}

impl ObjectInstance {
    pub fn new(class: Rc<ClassDef>) -> Self {
        Self {
            class,
            fields: HashMap::new(),
        }
    }

    pub fn set_property(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_compact_string(), value);
    }

    /// Unset properties read as `Null`.
    pub fn get_property(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Null)
    }
}
