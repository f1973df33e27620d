//! Name-based access to theme scripts spread over directories.
//!
//! Register directories of theme scripts and resolve themes by name. Names
//! are the path relative to the registered root, without extension, using
//! forward slashes:
//!
//! | File path | Name |
//! |-----------|------|
//! | `themes/night.theme` | `"night"` |
//! | `themes/base16/ocean.theme` | `"base16/ocean"` |
//!
//! The name with its extension (`"night.theme"`) resolves too.
//!
//! ```rust,no_run
//! use tincture::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! registry.add_dir("./themes")?;
//!
//! // Runs the script again on every call; edits on disk show up immediately.
//! let theme = registry.get("night")?;
//! # Ok::<(), tincture::RegistryError>(())
//! ```
//!
//! # Extension Priority
//!
//! Extensions are listed in priority order (`.theme` before `.lua` by
//! default). When one directory holds `night.theme` and `night.lua`,
//! `"night"` resolves to `night.theme`; `"night.lua"` still resolves
//! explicitly.
//!
//! # Collisions
//!
//! The same name provided by two different registered directories is a
//! configuration error and fails [`ThemeRegistry::refresh`] with
//! [`RegistryError::Collision`].

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::error::{RegistryError, ScriptError};
use crate::loader::ThemeLoader;
use crate::theme::Theme;

/// Where a registered theme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Script on disk, read again on every load.
    File(PathBuf),
    /// Script source held in memory.
    Inline(String),
}

impl ThemeSource {
    fn load(&self, loader: &ThemeLoader, name: &str) -> Result<Theme, ScriptError> {
        match self {
            ThemeSource::File(path) => loader.load(path),
            ThemeSource::Inline(source) => loader.load_source(name, source),
        }
    }
}

/// A theme script discovered while walking a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptFile {
    /// `"base16/ocean"`
    name: String,
    /// `"base16/ocean.theme"`
    name_with_ext: String,
    path: PathBuf,
    source_dir: PathBuf,
}

/// Outcome of [`ThemeRegistry::load_all`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully loaded themes by registry name.
    pub themes: BTreeMap<String, Theme>,
    /// Themes whose scripts failed, by registry name.
    pub failures: BTreeMap<String, ScriptError>,
}

impl LoadReport {
    /// True when every theme loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of theme scripts from directories and inline sources.
pub struct ThemeRegistry {
    loader: ThemeLoader,
    extensions: Vec<String>,
    dirs: Vec<PathBuf>,
    entries: BTreeMap<String, ThemeSource>,
    initialized: bool,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&LoaderConfig::default())
    }

    /// Creates an empty registry using the config's limits and extensions.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            loader: ThemeLoader::from_config(config),
            extensions: config.extensions.clone(),
            dirs: Vec::new(),
            entries: BTreeMap::new(),
            initialized: false,
        }
    }

    /// Registers a directory of theme scripts.
    ///
    /// The directory is validated here but walked lazily, on the first
    /// [`get`](Self::get) or an explicit [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// [`RegistryError::DirectoryNotFound`] if the path is missing or not a
    /// directory.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RegistryError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RegistryError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        self.dirs.push(path.to_path_buf());
        self.initialized = false;
        Ok(())
    }

    /// Registers an inline theme script. Inline themes shadow file-based
    /// themes with the same name.
    pub fn add_inline(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.entries
            .insert(name.into(), ThemeSource::Inline(source.into()));
    }

    /// Walks every registered directory again and rebuilds the name map.
    ///
    /// Inline themes are kept. On error the previous state is left intact.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Io`] if a directory cannot be walked
    /// - [`RegistryError::Collision`] if two directories provide the same name
    pub fn refresh(&mut self) -> Result<(), RegistryError> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();

        let mut files = Vec::new();
        for dir in &self.dirs {
            files.extend(walk_dir(dir, &extensions)?);
        }
        // Higher-priority extensions claim the extensionless name first.
        files.sort_by_key(|f| extension_priority(&f.name_with_ext, &extensions));

        let mut entries: BTreeMap<String, ThemeSource> = self
            .entries
            .iter()
            .filter(|(_, source)| matches!(source, ThemeSource::Inline(_)))
            .map(|(name, source)| (name.clone(), source.clone()))
            .collect();
        let mut sources: HashMap<String, (PathBuf, PathBuf)> = HashMap::new();

        for file in files {
            if let Some((existing_path, existing_dir)) = sources.get(&file.name) {
                if existing_dir != &file.source_dir {
                    return Err(RegistryError::Collision {
                        name: file.name,
                        existing_path: existing_path.clone(),
                        existing_dir: existing_dir.clone(),
                        conflicting_path: file.path,
                        conflicting_dir: file.source_dir,
                    });
                }
                // Same directory, lower-priority extension: explicit name only.
                entries
                    .entry(file.name_with_ext)
                    .or_insert(ThemeSource::File(file.path));
                continue;
            }

            sources.insert(
                file.name.clone(),
                (file.path.clone(), file.source_dir.clone()),
            );
            entries
                .entry(file.name)
                .or_insert_with(|| ThemeSource::File(file.path.clone()));
            entries
                .entry(file.name_with_ext)
                .or_insert(ThemeSource::File(file.path));
        }

        log::debug!(
            "theme registry refreshed: {} names from {} directories",
            entries.len(),
            self.dirs.len()
        );
        self.entries = entries;
        self.initialized = true;
        Ok(())
    }

    fn ensure_initialized(&mut self) -> Result<(), RegistryError> {
        if !self.initialized && !self.dirs.is_empty() {
            self.refresh()?;
        }
        Ok(())
    }

    /// Loads the theme registered under `name`.
    ///
    /// File-based themes are read and executed on every call.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the name is unknown
    /// - [`RegistryError::Script`] if the script cannot be read or fails
    pub fn get(&mut self, name: &str) -> Result<Theme, RegistryError> {
        self.ensure_initialized()?;
        let source = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        source
            .load(&self.loader, name)
            .map_err(|source| RegistryError::Script {
                name: name.to_string(),
                source,
            })
    }

    /// Where `name` resolves to, without loading it or walking directories.
    pub fn source(&self, name: &str) -> Option<&ThemeSource> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted. Includes the with-extension aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered names, counting with-extension aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Loads every distinct theme concurrently.
    ///
    /// Each script runs in its own interpreter on a scoped worker thread.
    /// A failing script is recorded in [`LoadReport::failures`] and does not
    /// affect the others. Aliases of the same file are loaded once, under
    /// the first (extensionless) name.
    ///
    /// # Errors
    ///
    /// Only directory walking errors; script failures are reported in the
    /// [`LoadReport`].
    pub fn load_all(&mut self) -> Result<LoadReport, RegistryError> {
        self.ensure_initialized()?;

        let mut seen_paths = Vec::new();
        let jobs: Vec<(&str, &ThemeSource)> = self
            .entries
            .iter()
            .filter(|(_, source)| match source {
                ThemeSource::File(path) => {
                    if seen_paths.contains(path) {
                        false
                    } else {
                        seen_paths.push(path.clone());
                        true
                    }
                }
                ThemeSource::Inline(_) => true,
            })
            .map(|(name, source)| (name.as_str(), source))
            .collect();

        let workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let batch_size = jobs.len().div_ceil(workers).max(1);
        let loader = &self.loader;

        let results: Vec<(String, Result<Theme, ScriptError>)> = std::thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .chunks(batch_size)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter()
                            .map(|(name, source)| (name.to_string(), source.load(loader, name)))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        let mut report = LoadReport::default();
        for (name, result) in results {
            match result {
                Ok(theme) => {
                    report.themes.insert(name, theme);
                }
                Err(err) => {
                    log::warn!("theme '{}' failed to load: {}", name, err);
                    report.failures.insert(name, err);
                }
            }
        }
        Ok(report)
    }
}

// =============================================================================
// Directory walking
// =============================================================================

/// Index of the first extension `name` ends with; `usize::MAX` if none.
fn extension_priority(name: &str, extensions: &[&str]) -> usize {
    extensions
        .iter()
        .position(|ext| name.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Recursively collects scripts under `root` with a recognized extension.
fn walk_dir(root: &Path, extensions: &[&str]) -> Result<Vec<ScriptFile>, RegistryError> {
    let root = root.canonicalize().map_err(|source| RegistryError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    walk_dir_recursive(&root, &root, extensions, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    extensions: &[&str],
    files: &mut Vec<ScriptFile>,
) -> Result<(), RegistryError> {
    let io_error = |source: std::io::Error| RegistryError::Io {
        path: current.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(current).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, extensions, files)?;
        } else if path.is_file() {
            if let Some(file) = script_file(&path, root, extensions) {
                files.push(file);
            } else {
                log::trace!("ignoring {}", path.display());
            }
        }
    }
    Ok(())
}

fn script_file(path: &Path, root: &Path, extensions: &[&str]) -> Option<ScriptFile> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let extension = extensions.iter().find(|ext| name_with_ext.ends_with(*ext))?;
    let name = name_with_ext.strip_suffix(extension)?.to_string();
    if name.is_empty() || name.ends_with('/') {
        return None;
    }

    Some(ScriptFile {
        name,
        name_with_ext,
        path: path.to_path_buf(),
        source_dir: root.to_path_buf(),
    })
}
