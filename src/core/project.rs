//! Project discovery and layout
//!
//! A braid project is a directory tree under version control:
//!
//! ```text
//! my-project/
//!   .braid/            marker + local config + short-ID index
//!   project.yaml       manifest (name, client, dates, counters)
//!   items/<type>/      one YAML file per item, grouped by item type
//!   workstreams/       one YAML file per workstream
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::entities::item::{Item, ItemType};

/// Marker directory identifying a project root
pub const MARKER_DIR: &str = ".braid";

/// Project manifest filename
pub const MANIFEST_FILE: &str = "project.yaml";

/// Suffix of all entity files
pub const ENTITY_SUFFIX: &str = ".braid.yaml";

/// Errors that can occur during project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not inside a braid project (no {MARKER_DIR} directory found). Run 'braid init' first")]
    NotInProject,

    #[error("A braid project already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Failed to read project manifest: {0}")]
    ManifestRead(#[source] crate::yaml::YamlError),

    #[error("Failed to write project manifest: {0}")]
    ManifestWrite(#[source] serde_yml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Project manifest - the contents of `project.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project name
    pub name: String,

    /// Client/customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Project start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_start: Option<NaiveDate>,

    /// Project end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_end: Option<NaiveDate>,

    /// Next auto-increment number for items
    #[serde(default = "default_next_item_num")]
    pub next_item_num: u32,

    /// Last full indicator recalculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators_updated: Option<DateTime<Utc>>,
}

fn default_next_item_num() -> u32 {
    1
}

impl Manifest {
    /// Fresh manifest for a newly initialized project
    pub fn new(name: String) -> Self {
        Self {
            name,
            client_name: None,
            project_start: None,
            project_end: None,
            next_item_num: 1,
            indicators_updated: None,
        }
    }
}

/// A discovered braid project
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Walk up from the current directory to find the project root
    pub fn discover() -> Result<Self, ProjectError> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Walk up from the given directory to find the project root
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut dir = start;
        loop {
            if dir.join(MARKER_DIR).is_dir() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Err(ProjectError::NotInProject),
            }
        }
    }

    /// Initialize a new project at the given root
    pub fn init(root: &Path, name: String) -> Result<Self, ProjectError> {
        if root.join(MARKER_DIR).is_dir() {
            return Err(ProjectError::AlreadyInitialized(root.to_path_buf()));
        }

        std::fs::create_dir_all(root.join(MARKER_DIR))?;
        for item_type in ItemType::all() {
            std::fs::create_dir_all(root.join("items").join(item_type.dir_name()))?;
        }
        std::fs::create_dir_all(root.join("workstreams"))?;

        let project = Self {
            root: root.to_path_buf(),
        };
        project.save_manifest(&Manifest::new(name))?;
        Ok(project)
    }

    /// The project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the project manifest
    pub fn manifest(&self) -> Result<Manifest, ProjectError> {
        crate::yaml::parse_yaml_file(&self.root.join(MANIFEST_FILE))
            .map_err(ProjectError::ManifestRead)
    }

    /// Write the project manifest
    pub fn save_manifest(&self, manifest: &Manifest) -> Result<(), ProjectError> {
        let yaml = serde_yml::to_string(manifest).map_err(ProjectError::ManifestWrite)?;
        std::fs::write(self.root.join(MANIFEST_FILE), yaml)?;
        Ok(())
    }

    /// Allocate the next item number, bumping the manifest counter
    pub fn allocate_item_num(&self) -> Result<u32, ProjectError> {
        let mut manifest = self.manifest()?;
        let num = manifest.next_item_num;
        manifest.next_item_num += 1;
        self.save_manifest(&manifest)?;
        Ok(num)
    }

    /// Record a completed full indicator recalculation
    pub fn touch_indicators_updated(&self, when: DateTime<Utc>) -> Result<(), ProjectError> {
        let mut manifest = self.manifest()?;
        manifest.indicators_updated = Some(when);
        self.save_manifest(&manifest)
    }

    /// Directory for items of the given type
    pub fn item_dir(&self, item_type: ItemType) -> PathBuf {
        self.root.join("items").join(item_type.dir_name())
    }

    /// File path for an item
    pub fn item_path(&self, item: &Item) -> PathBuf {
        self.item_dir(item.item_type).join(item.file_name())
    }

    /// Directory for workstream files
    pub fn workstream_dir(&self) -> PathBuf {
        self.root.join("workstreams")
    }

    /// All item files in the project, sorted by path for stable ordering
    pub fn iter_item_files(&self) -> Vec<PathBuf> {
        Self::entity_files_under(&self.root.join("items"))
    }

    /// All workstream files in the project
    pub fn iter_workstream_files(&self) -> Vec<PathBuf> {
        Self::entity_files_under(&self.workstream_dir())
    }

    fn entity_files_under(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(ENTITY_SUFFIX))
            .map(|e| e.into_path())
            .collect();
        files.sort();
        files
    }
}
