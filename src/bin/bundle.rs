// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cppsourcebundler::{Bundler, Config, FilterMode};

/// Without options, bundles the files listed in scripts/sources.txt,
/// relative to the parent directory, into btbundled.cpp.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// Directory the manifest entries are relative to.
    #[clap(long)]
    pub base_dir: Option<PathBuf>,
    /// The file listing the sources to bundle, one per line.
    #[clap(long)]
    pub manifest: Option<PathBuf>,
    /// The output file.
    #[clap(long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Strip only real include guards instead of every
    /// #ifndef/#define/#endif line.
    #[clap(long)]
    pub strict: bool,
    /// Print the bundle instead of writing the output file.
    #[clap(long)]
    pub stdout: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(ref base_dir) = self.base_dir {
            config.base_dir_set(base_dir);
        }
        if let Some(ref manifest) = self.manifest {
            config.manifest_set(manifest);
        }
        if let Some(ref output) = self.output {
            config.bundle_set(output);
        }
        if self.strict {
            config.filter_mode_set(FilterMode::Guard);
        }
        config
    }
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = cli.config();
    let bundler = Bundler::new(&config);
    if cli.stdout {
        let bundle = bundler.assemble()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bundle.as_str().as_bytes())?;
        stdout.flush()?;
    } else {
        bundler.run()?;
        println!("bundle written to {}", config.bundle_filename().display());
    }
    Ok(())
}
