// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::path::{Path, PathBuf};

use crate::filter::FilterMode;
use crate::header::OPTIM_HEADER;

const BASE_DIR: &str = "..";
const MANIFEST_FILENAME: &str = "scripts/sources.txt";
const BUNDLE_FILENAME: &str = "btbundled.cpp";

/// Everything a bundling run needs to know, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_dir: PathBuf,
    manifest_filename: PathBuf,
    bundle_filename: PathBuf,
    header: String,
    filter_mode: FilterMode,
}

impl Default for Config {
    /// The layout of the project the tool was written for: run from the
    /// project root, with manifest entries relative to its parent.
    fn default() -> Config {
        Config::new(BASE_DIR, MANIFEST_FILENAME, BUNDLE_FILENAME)
    }
}

impl Config {
    pub fn new<B, M, O>(base_dir: B, manifest_filename: M, bundle_filename: O) -> Config
    where
        B: Into<PathBuf>,
        M: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Config {
            base_dir: base_dir.into(),
            manifest_filename: manifest_filename.into(),
            bundle_filename: bundle_filename.into(),
            header: String::from(OPTIM_HEADER),
            filter_mode: FilterMode::default(),
        }
    }

    pub fn base_dir_set<P: Into<PathBuf>>(&mut self, base_dir: P) {
        self.base_dir = base_dir.into();
    }

    pub fn manifest_set<P: Into<PathBuf>>(&mut self, manifest_filename: P) {
        self.manifest_filename = manifest_filename.into();
    }

    pub fn bundle_set<P: Into<PathBuf>>(&mut self, bundle_filename: P) {
        self.bundle_filename = bundle_filename.into();
    }

    pub fn header_set<S: Into<String>>(&mut self, header: S) {
        self.header = header.into();
    }

    pub fn filter_mode_set(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn manifest_filename(&self) -> &Path {
        &self.manifest_filename
    }

    pub fn bundle_filename(&self) -> &Path {
        &self.bundle_filename
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Where a manifest entry lives on disk.
    pub fn resolve<P: AsRef<Path>>(&self, entry: P) -> PathBuf {
        self.base_dir.join(entry)
    }
}
