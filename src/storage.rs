// storage.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::recipe::Recipe;

/// Storage key holding the serialized recipe list.
pub const RECIPES_KEY: &str = "recipes";

/// Synchronous key-value storage with the shape of a browser's local
/// storage. Handlers only ever see this trait, so tests can swap the
/// file backend for an in-memory one.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
    /// Deletes every key, not just the recipe list.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-memory backend for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        Ok(())
    }
}

/// File-backed storage: the whole store is one JSON object (key to string
/// value) rewritten on every mutation. Reads are served from memory after
/// open, matching the synchronous get/set surface.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the store at `path`, creating an empty one if the file does
    /// not exist yet. A file that is present but not a JSON object is an
    /// error; there is no recovery from a corrupt store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.items)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        self.flush()
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.flush()
    }
}

/// Owns the storage backend and the `recipes` key. The persisted list is
/// the single source of truth; the rendered page is rebuilt from it on
/// every load.
pub struct RecipeStore {
    backend: Box<dyn Storage>,
}

impl RecipeStore {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self { backend }
    }

    /// Reads the recipe list. A missing key is an empty list; a value that
    /// does not decode propagates as an error and takes the whole list
    /// page down with it.
    pub fn load(&self) -> Result<Vec<Recipe>, StorageError> {
        match self.backend.get_item(RECIPES_KEY) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the full list, replacing whatever was stored before.
    pub fn save(&mut self, recipes: &[Recipe]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(recipes)?;
        self.backend.set_item(RECIPES_KEY, &raw)
    }

    /// Appends one recipe: read the current list, push, write it back.
    pub fn append(&mut self, recipe: Recipe) -> Result<(), StorageError> {
        let mut recipes = self.load()?;
        recipes.push(recipe);
        self.save(&recipes)
    }

    /// Erases the entire backing store, recipes key included.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.backend.clear()
    }
}
