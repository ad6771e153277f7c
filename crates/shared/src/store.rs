use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

/// Key-value string store backing every persisted record.
///
/// State holders write the new record first and only update memory once
/// `set`/`remove` succeed, so a failed write leaves both sides unchanged.
/// Intents touching two records (removing a grocery item, clearing) can stop
/// between the two writes.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> crate::Result<()>;

    fn remove(&mut self, key: &str) -> crate::Result<()>;
}

/// Decode a JSON record, falling back to the default value when the record is
/// absent or cannot be parsed.
pub fn load_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Store + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(record = key, error = %err, "malformed record, starting empty");
            T::default()
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> crate::Result<()>
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> crate::Result<()> {
        self.entries.insert(key.to_owned(), value);

        Ok(())
    }

    fn remove(&mut self, key: &str) -> crate::Result<()> {
        self.entries.remove(key);

        Ok(())
    }
}

/// Store kept as a single JSON object on disk.
///
/// Every write rewrites the whole file through a sibling temp file and a
/// rename, so a crash never leaves a half written document behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "malformed store file, starting empty");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(path = %path.display(), records = entries.len(), "store opened");

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");

        fs::write(&tmp, serde_json::to_vec_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> crate::Result<()> {
        self.entries.insert(key.to_owned(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> crate::Result<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }

        self.flush()
    }
}
