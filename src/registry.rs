// src/registry.rs
use crate::error::LogError;
use crate::palette::ColorGenerator;
use crate::type_key::TypeKey;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Type → color assignments, kept in the order types first appeared.
///
/// Mutation goes through `&mut self`; share it behind a lock if more than one
/// thread logs.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: IndexMap<TypeKey, String>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        ColorRegistry {
            colors: IndexMap::new(),
        }
    }

    /// Assign `hex` to `key`, replacing any previous color. The color string
    /// is stored as given.
    pub fn set_color(&mut self, key: TypeKey, hex: impl Into<String>) {
        let hex = hex.into();
        match self.colors.entry(key) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(type_name = entry.key().name(), color = %hex, "overriding type color");
                entry.insert(hex);
            }
            Entry::Vacant(entry) => {
                tracing::debug!(type_name = entry.key().name(), color = %hex, "assigning type color");
                entry.insert(hex);
            }
        }
    }

    /// Insert a color for a type that has none yet
    pub fn add(&mut self, key: TypeKey, hex: impl Into<String>) -> Result<(), LogError> {
        match self.colors.entry(key) {
            Entry::Occupied(entry) => Err(LogError::DuplicateType {
                name: entry.key().name().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(hex.into());
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &TypeKey) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.colors.contains_key(key)
    }

    /// Existing color for `key`, or one freshly generated from its display
    /// name and remembered. Check and insert happen on one entry, so a type
    /// is never generated twice.
    pub fn get_or_generate<G>(&mut self, key: TypeKey, generator: &G) -> &str
    where
        G: ColorGenerator + ?Sized,
    {
        match self.colors.entry(key) {
            Entry::Occupied(entry) => {
                tracing::debug!(type_name = entry.key().name(), "type color cache hit");
                entry.into_mut().as_str()
            }
            Entry::Vacant(entry) => {
                let hex = generator.generate(entry.key().name());
                entry.insert(hex).as_str()
            }
        }
    }

    pub fn remove(&mut self, key: &TypeKey) -> Option<String> {
        self.colors.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &str)> {
        self.colors.iter().map(|(key, hex)| (key, hex.as_str()))
    }
}
