// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use goldenfile::Mint;

use cppsourcebundler::{Bundler, Config, FilterMode};

const INPUT_DIR: &str = "tests/testdata/input";
const OUTPUT_DIR: &str = "tests/testdata/output";

#[test]
fn guarded() -> Result<()> {
    let mut mint = Mint::new(OUTPUT_DIR);
    golden(&mut mint, "guarded", "guarded.cpp", FilterMode::Prefix)
}

#[test]
fn game() -> Result<()> {
    let mut mint = Mint::new(OUTPUT_DIR);
    golden(&mut mint, "game", "game.cpp", FilterMode::Prefix)
}

#[test]
fn game_strict() -> Result<()> {
    let mut mint = Mint::new(OUTPUT_DIR);
    golden(&mut mint, "game", "game-strict.cpp", FilterMode::Guard)
}

fn golden(mint: &mut Mint, testname: &str, output_name: &str, mode: FilterMode) -> Result<()> {
    let input_dir = {
        let mut p = PathBuf::from(INPUT_DIR);
        p.push(testname);
        p
    };
    let mut config = Config::new(&input_dir, input_dir.join("sources.txt"), output_name);
    config.filter_mode_set(mode);
    let bundle = Bundler::new(&config).assemble()?;
    let mut golden = mint.new_goldenfile(output_name)?;
    golden.write_all(bundle.as_str().as_bytes())?;
    Ok(())
}
