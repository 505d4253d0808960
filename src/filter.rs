// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

//! Removal of the preprocessor lines that become redundant, or harmful,
//! once every file is pasted into the same compilation unit.

use lazy_static::lazy_static;
use regex::Regex;

/// Lines starting with any of these are dropped in [`FilterMode::Prefix`].
pub const STRIPPED_PREFIXES: [&str; 4] = ["#ifndef", "#define", "#endif", "#include \""];

lazy_static! {
    static ref IFNDEF_RE: Regex = directive_regex(r"ifndef  (?P<name>\w+)");
    static ref DEFINE_RE: Regex = directive_regex(r"define  (?P<name>\w+)");
    static ref IF_RE: Regex = directive_regex(r"if(?:n?def)?\b");
    static ref ENDIF_RE: Regex = directive_regex(r"endif\b");
    static ref LOCAL_INCLUDE_RE: Regex = directive_regex(r#"include ""#);
}

/// Regex for a line opening with the given directive, with any indentation
/// and spacing after the `#`. In `directive`, a double space stands for
/// required whitespace and a single space for optional whitespace.
fn directive_regex<S: AsRef<str>>(directive: S) -> Regex {
    Regex::new(
        format!(r"^\s*#\s*{}", directive.as_ref())
            .replace("  ", r"\s+")
            .replace(' ', r"\s*")
            .as_str(),
    )
    .unwrap()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Drop every line starting with one of [`STRIPPED_PREFIXES`].
    ///
    /// This also drops an `#endif` closing an unrelated `#ifdef`, and any
    /// `#define` at all, which can change what the bundle compiles to.
    #[default]
    Prefix,
    /// Drop only include guards and quoted includes, tracking the nesting
    /// of conditional blocks to find the `#endif` that closes each guard.
    Guard,
}

/// Whether `line` is dropped by [`FilterMode::Prefix`].
pub fn is_stripped(line: &str) -> bool {
    STRIPPED_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Returns the lines of one file that go into the bundle, in their
/// original order.
pub fn filter_lines<'s>(lines: &[&'s str], mode: FilterMode) -> Vec<&'s str> {
    match mode {
        FilterMode::Prefix => lines
            .iter()
            .copied()
            .filter(|line| !is_stripped(line))
            .collect(),
        FilterMode::Guard => filter_guarded(lines),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Guard,
    Conditional,
}

fn filter_guarded<'s>(lines: &[&'s str]) -> Vec<&'s str> {
    let mut kept = Vec::with_capacity(lines.len());
    let mut open: Vec<Block> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if let Some(cap) = IFNDEF_RE.captures(line) {
            let define = if open.is_empty() {
                guard_define(lines, i + 1, &cap["name"])
            } else {
                None
            };
            if let Some(j) = define {
                // Blank lines between the #ifndef and the #define stay.
                kept.extend_from_slice(&lines[i + 1..j]);
                open.push(Block::Guard);
                i = j + 1;
                continue;
            }
            open.push(Block::Conditional);
            kept.push(line);
        } else if IF_RE.is_match(line) {
            open.push(Block::Conditional);
            kept.push(line);
        } else if ENDIF_RE.is_match(line) {
            if open.pop() != Some(Block::Guard) {
                kept.push(line);
            }
        } else if !LOCAL_INCLUDE_RE.is_match(line) {
            kept.push(line);
        }
        i += 1;
    }
    kept
}

/// Index of the `#define <name>` completing a guard, if the first
/// non-blank line from `start` is one.
fn guard_define(lines: &[&str], start: usize, name: &str) -> Option<usize> {
    let j = start + lines[start..].iter().position(|l| !l.trim().is_empty())?;
    let cap = DEFINE_RE.captures(lines[j])?;
    (&cap["name"] == name).then_some(j)
}
