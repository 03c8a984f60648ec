use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::foundation::error::{MonogramError, MonogramResult};
use crate::store::{CreateOutcome, StoreEntry, UserStore};

/// Directory-backed [`UserStore`]: one directory per user, one file per entry.
#[derive(Clone, Debug)]
pub struct FsUserStore {
    root: PathBuf,
}

impl FsUserStore {
    /// Open (and create if needed) the store directory.
    pub fn open(root: impl Into<PathBuf>) -> MonogramResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| map_io(&root, e))?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl UserStore for FsUserStore {
    type Entry = FsEntry;

    fn list(&self) -> MonogramResult<Vec<FsEntry>> {
        let mut out = Vec::new();
        let dir = fs::read_dir(&self.root).map_err(|e| map_io(&self.root, e))?;
        for item in dir {
            let item = item.map_err(|e| map_io(&self.root, e))?;
            let path = item.path();
            if !path.is_file() {
                continue;
            }
            let name = item.file_name().to_string_lossy().into_owned();
            out.push(FsEntry { name, path });
        }
        Ok(out)
    }

    fn get(&self, name: &str) -> MonogramResult<Option<FsEntry>> {
        let path = self.entry_path(name);
        if path.is_file() {
            Ok(Some(FsEntry {
                name: name.to_string(),
                path,
            }))
        } else {
            Ok(None)
        }
    }

    fn create(&self, name: &str) -> MonogramResult<CreateOutcome<FsEntry>> {
        let path = self.entry_path(name);
        let entry = FsEntry {
            name: name.to_string(),
            path: path.clone(),
        };
        // create_new is the atomicity point: exactly one concurrent creator
        // observes `Created`, everyone else gets the existing entry.
        match fs::File::create_new(&path) {
            Ok(_) => Ok(CreateOutcome::Created(entry)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::Existing(entry))
            }
            Err(e) => Err(map_io(&path, e)),
        }
    }
}

/// A file entry inside an [`FsUserStore`] directory.
#[derive(Clone, Debug)]
pub struct FsEntry {
    name: String,
    path: PathBuf,
}

impl FsEntry {
    /// Absolute or store-relative path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreEntry for FsEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn bytes(&self) -> MonogramResult<Vec<u8>> {
        fs::read(&self.path).map_err(|e| map_io(&self.path, e))
    }

    fn write(&mut self, data: &[u8]) -> MonogramResult<()> {
        fs::write(&self.path, data).map_err(|e| map_io(&self.path, e))
    }

    fn delete(self) -> MonogramResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // Already gone, e.g. a concurrent invalidation pass.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io(&self.path, e)),
        }
    }
}

fn map_io(path: &Path, err: io::Error) -> MonogramError {
    match err.kind() {
        io::ErrorKind::PermissionDenied
        | io::ErrorKind::ReadOnlyFilesystem
        | io::ErrorKind::StorageFull
        | io::ErrorKind::QuotaExceeded => {
            MonogramError::not_permitted(format!("{}: {err}", path.display()))
        }
        _ => MonogramError::Other(anyhow::Error::new(err).context(path.display().to_string())),
    }
}
