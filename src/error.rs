// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can abort a bundling run. None of them is recovered.
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("error reading manifest {}", path.display())]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading source file {}", path.display())]
    SourceFileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing bundle {}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            BundleError::ManifestNotFound { path, .. }
            | BundleError::SourceFileNotFound { path, .. }
            | BundleError::IoWrite { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
