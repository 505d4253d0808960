// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Config;
use crate::error::{BundleError, Result};
use crate::filter::filter_lines;
use crate::header;
use crate::manifest::Manifest;

/// One file listed in the manifest, with its whole contents.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn read<P: Into<PathBuf>>(path: P) -> Result<SourceFile> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(SourceFile { path, text }),
            Err(source) => Err(BundleError::SourceFileNotFound { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lines of the file, each with its terminator.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split_inclusive('\n').collect()
    }
}

/// The assembled single-file output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    contents: String,
    files: usize,
    stripped: usize,
}

impl Bundle {
    pub fn as_str(&self) -> &str {
        &self.contents
    }

    pub fn into_string(self) -> String {
        self.contents
    }

    /// How many manifest entries went in, duplicates included.
    pub fn files(&self) -> usize {
        self.files
    }

    /// How many source lines the filter dropped.
    pub fn stripped(&self) -> usize {
        self.stripped
    }

    /// Writes the bundle to `path`, replacing it only once everything was
    /// written: on error, whatever was at `path` before is left alone.
    ///
    /// An existing output keeps its permissions; a new one gets the same
    /// mode `File::create` would give it.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let io_write = |source: io::Error| BundleError::IoWrite {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let previous = fs::metadata(path).ok().map(|m| m.permissions());
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Masked by the umask at creation.
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir).map_err(io_write)?;
        if let Some(permissions) = previous {
            tmp.as_file().set_permissions(permissions).map_err(io_write)?;
        }
        tmp.write_all(self.contents.as_bytes()).map_err(io_write)?;
        tmp.as_file().sync_all().map_err(io_write)?;
        tmp.persist(path).map_err(|e| io_write(e.error))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Bundler<'a> {
    config: &'a Config,
}

impl<'a> Bundler<'a> {
    pub fn new(config: &'a Config) -> Bundler<'a> {
        Bundler { config }
    }

    /// Reads the manifest, assembles the bundle and writes it to the
    /// configured output.
    pub fn run(&self) -> Result<Bundle> {
        let bundle = self.assemble()?;
        let output = self.config.bundle_filename();
        bundle.write_to(output)?;
        info!(
            "wrote {} with {} files, {} lines stripped",
            output.display(),
            bundle.files(),
            bundle.stripped()
        );
        Ok(bundle)
    }

    /// Reads the manifest and assembles the bundle in memory.
    pub fn assemble(&self) -> Result<Bundle> {
        let manifest = Manifest::read(self.config)?;
        self.assemble_manifest(&manifest)
    }

    /// Header first, then each file's filtered lines followed by one blank
    /// line, in manifest order.
    pub fn assemble_manifest(&self, manifest: &Manifest) -> Result<Bundle> {
        let mut bundle = Bundle::default();
        header::inject(&mut bundle.contents, self.config.header());
        for path in manifest {
            let source = SourceFile::read(path)?;
            self.append(&mut bundle, &source);
        }
        Ok(bundle)
    }

    fn append(&self, bundle: &mut Bundle, source: &SourceFile) {
        let lines = source.lines();
        let kept = filter_lines(&lines, self.config.filter_mode());
        debug!(
            "{}: kept {} of {} lines",
            source.path().display(),
            kept.len(),
            lines.len()
        );
        for line in &kept {
            bundle.contents.push_str(line);
        }
        if kept.last().is_some_and(|line| !line.ends_with('\n')) {
            bundle.contents.push('\n');
        }
        bundle.contents.push('\n');
        bundle.files += 1;
        bundle.stripped += lines.len() - kept.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::filter::FilterMode;

    fn bundle_of(files: &[&str], mode: FilterMode) -> String {
        let mut config = Config::new(".", "sources.txt", "out.cpp");
        config.header_set("// header\n");
        config.filter_mode_set(mode);
        let bundler = Bundler::new(&config);
        let mut bundle = Bundle::default();
        header::inject(&mut bundle.contents, config.header());
        for (i, text) in files.iter().enumerate() {
            let source = SourceFile {
                path: PathBuf::from(format!("f{}.h", i)),
                text: text.to_string(),
            };
            bundler.append(&mut bundle, &source);
        }
        bundle.into_string()
    }

    #[test]
    fn guard_and_include_scenario() {
        let out = bundle_of(
            &[
                "#ifndef X\n#define X\nint a;\n#endif\n",
                "#include \"f1.h\"\nint main(){}\n",
            ],
            FilterMode::Prefix,
        );
        assert_eq!(out, "// header\nint a;\n\nint main(){}\n\n");
    }

    #[test]
    fn separator_regardless_of_trailing_blanks() {
        let out = bundle_of(&["int a;\n\n\n", "int b;\n"], FilterMode::Prefix);
        assert_eq!(out, "// header\nint a;\n\n\n\nint b;\n\n");
    }

    #[test]
    fn missing_final_newline_is_terminated() {
        let out = bundle_of(&["int a;", "int b;"], FilterMode::Prefix);
        assert_eq!(out, "// header\nint a;\n\nint b;\n\n");
    }

    #[test]
    fn fully_stripped_file_leaves_separator() {
        let out = bundle_of(&["#ifndef X\n#define X\n#endif\n"], FilterMode::Prefix);
        assert_eq!(out, "// header\n\n");
    }

    #[test]
    fn guard_mode_keeps_unrelated_endif() {
        let out = bundle_of(
            &["#ifndef X\n#define X\n#ifdef D\nint d;\n#endif\n#endif\n"],
            FilterMode::Guard,
        );
        assert_eq!(out, "// header\n#ifdef D\nint d;\n#endif\n\n");
    }

    #[test]
    fn source_file_lines_keep_terminators() {
        let source = SourceFile {
            path: PathBuf::from("a.h"),
            text: String::from("a\r\nb\n\nc"),
        };
        assert_eq!(source.lines(), vec!["a\r\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn missing_source_file() {
        match SourceFile::read("no/such/file.cpp") {
            Err(BundleError::SourceFileNotFound { path, .. }) => {
                assert_eq!(path, PathBuf::from("no/such/file.cpp"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
