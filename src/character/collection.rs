use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{DelicacyError, DelicacyResult};

/// One layer directory. Every file in it is a candidate asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    name: String,
    path: PathBuf,
}

impl Layer {
    /// Name mixed into the layer's pick digest.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the layer's assets.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Candidate assets, sorted by path. An empty layer is [`DelicacyError::NotFound`].
    pub fn assets(&self) -> DelicacyResult<Vec<PathBuf>> {
        let files = list_files(&self.path)?;
        if files.is_empty() {
            return Err(DelicacyError::not_found(format!(
                "layer '{}' has no assets in {}",
                self.name,
                self.path.display()
            )));
        }
        Ok(files)
    }
}

/// A named stack of layers, bottom first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    name: String,
    root: PathBuf,
    layers: Vec<Layer>,
}

impl Collection {
    /// Use every subdirectory of `root` as a layer, stacked in name order.
    ///
    /// Layer names are the directory names.
    pub fn discover(name: impl Into<String>, root: impl Into<PathBuf>) -> DelicacyResult<Self> {
        let root = root.into();
        let layers = list_subdirectories(&root)?
            .into_iter()
            .map(|path| Layer {
                name: file_name(&path),
                path,
            })
            .collect();
        Ok(Self {
            name: name.into(),
            root,
            layers,
        })
    }

    /// Like [`Collection::discover`], but with explicit layer names.
    ///
    /// `names[i]` names the i-th subdirectory in sorted order. The count must match and names
    /// must be unique.
    pub fn with_layer_names(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        names: Vec<String>,
    ) -> DelicacyResult<Self> {
        let mut collection = Self::discover(name, root)?;
        if names.len() != collection.layers.len() {
            return Err(DelicacyError::invalid_input(format!(
                "{} layer names given for {} layer directories",
                names.len(),
                collection.layers.len()
            )));
        }
        for (i, n) in names.iter().enumerate() {
            if names[..i].contains(n) {
                return Err(DelicacyError::invalid_input(format!(
                    "duplicate layer name '{n}'"
                )));
            }
        }
        for (layer, n) in collection.layers.iter_mut().zip(names) {
            layer.name = n;
        }
        Ok(collection)
    }

    /// Collection name, mixed into every pick.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Layers, bottom first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

fn sorted_entries(dir: &Path, want_dirs: bool) -> DelicacyResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DelicacyError::not_found(format!(
            "directory {} does not exist",
            dir.display()
        )));
    }
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry
            .with_context(|| format!("read entry in {}", dir.display()))?
            .path();
        if is_hidden(&path) || path.is_dir() != want_dirs {
            continue;
        }
        out.push(path);
    }
    out.sort();
    Ok(out)
}

/// Non-hidden subdirectories of `dir`, sorted.
pub fn list_subdirectories(dir: &Path) -> DelicacyResult<Vec<PathBuf>> {
    sorted_entries(dir, true)
}

/// Non-hidden files in `dir`, sorted.
pub fn list_files(dir: &Path) -> DelicacyResult<Vec<PathBuf>> {
    sorted_entries(dir, false)
}

#[cfg(test)]
#[path = "../../tests/unit/character/collection.rs"]
mod tests;
