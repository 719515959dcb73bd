mod object;

pub use object::{ClassDef, ObjectInstance};

use crate::value::Value;
use compact_str::{CompactString, ToCompactString};
use std::{
    collections::{hash_map::Entry, HashMap},
    rc::Rc,
};

/// Runtime state of one script run.
///
/// Variables, objects and classes live in separate namespaces, so the same
/// name can refer to one of each. Defining a name that already exists
/// replaces the previous entry.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<CompactString, Value>,
    objects: HashMap<CompactString, ObjectInstance>,
    classes: HashMap<CompactString, Rc<ClassDef>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_class(
        &mut self,
        name: &str,
        properties: Vec<(CompactString, CompactString)>,
    ) -> Rc<ClassDef> {
        let class = Rc::new(ClassDef::new(name, properties));
        self.classes
            .insert(name.to_compact_string(), Rc::clone(&class));
        class
    }

    pub fn lookup_class(&self, name: &str) -> Option<Rc<ClassDef>> {
        self.classes.get(name).cloned()
    }

    pub fn define_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_compact_string(), value);
    }

    pub fn lookup_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn define_object(&mut self, name: &str, class: Rc<ClassDef>) -> &mut ObjectInstance {
        let instance = ObjectInstance::new(class);
        match self.objects.entry(name.to_compact_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(instance);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(instance),
        }
    }

    pub fn lookup_object(&self, name: &str) -> Option<&ObjectInstance> {
        self.objects.get(name)
    }

    pub fn lookup_object_mut(&mut self, name: &str) -> Option<&mut ObjectInstance> {
        self.objects.get_mut(name)
    }
}
