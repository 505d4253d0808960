// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::config::Config;
use crate::error::{BundleError, Result};

/// The ordered list of files to merge, already resolved against the
/// configured base directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<PathBuf>,
}

impl Manifest {
    /// Reads the manifest named by the config.
    ///
    /// Listed files are not checked here; a missing one only shows up
    /// when the bundler tries to read it.
    pub fn read(config: &Config) -> Result<Manifest> {
        let path = config.manifest_filename();
        let contents =
            fs::read_to_string(path).map_err(|source| BundleError::ManifestNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        let manifest = Manifest::parse(&contents, config);
        debug!(
            "manifest {} lists {} files",
            path.display(),
            manifest.len()
        );
        Ok(manifest)
    }

    /// One path per non-blank line, surrounding whitespace trimmed.
    pub fn parse(contents: &str, config: &Config) -> Manifest {
        let entries: Vec<PathBuf> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| config.resolve(line))
            .collect();
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry) {
                warn!("{} is listed more than once", entry.display());
            }
        }
        Manifest { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
