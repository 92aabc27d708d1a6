use serde::ser::{Serialize, SerializeMap, Serializer};

/// Bundle classes per module, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSet {
    entries: Vec<(String, Vec<String>)>,
}

impl BundleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the classes of `module`. Re-inserting a module replaces its
    /// classes but keeps its original position; the old classes are returned.
    pub fn insert(&mut self, module: impl Into<String>, classes: Vec<String>) -> Option<Vec<String>> {
        let module = module.into();
        match self.entries.iter_mut().find(|(name, _)| *name == module) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, classes)),
            None => {
                self.entries.push((module, classes));
                None
            }
        }
    }

    pub fn get(&self, module: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == module)
            .map(|(_, classes)| classes.as_slice())
    }

    pub fn contains(&self, module: &str) -> bool {
        self.get(module).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, classes)| (name.as_str(), classes.as_slice()))
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of bundle classes across all modules.
    pub fn class_count(&self) -> usize {
        self.entries.iter().map(|(_, classes)| classes.len()).sum()
    }
}

impl IntoIterator for BundleSet {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<M: Into<String>> FromIterator<(M, Vec<String>)> for BundleSet {
    fn from_iter<I: IntoIterator<Item = (M, Vec<String>)>>(iter: I) -> Self {
        let mut set = BundleSet::new();
        for (module, classes) in iter {
            set.insert(module, classes);
        }
        set
    }
}

impl Serialize for BundleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (module, classes) in &self.entries {
            map.serialize_entry(module, classes)?;
        }
        map.end()
    }
}
