// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

/// GCC directives that go before any bundled source.
pub const OPTIM_HEADER: &str = r#"
#undef _GLIBCXX_DEBUG // disable run-time bound checking, etc
#pragma GCC optimize("Ofast,inline") // Ofast = O3,fast-math,allow-store-data-races,no-protect-parens

#pragma GCC target("bmi,bmi2,lzcnt,popcnt") // bit manipulation
#pragma GCC target("movbe") // byte swap
#pragma GCC target("aes,pclmul,rdrnd") // encryption
#pragma GCC target("avx,avx2,f16c,fma,sse3,ssse3,sse4.1,sse4.2") // SIMD
"#;

/// Writes the header block at the start of an empty bundle buffer.
///
/// The block goes in verbatim: if it doesn't end in a newline, neither
/// does the buffer, and the first source line is glued to it.
pub fn inject(buffer: &mut String, header: &str) {
    debug_assert!(buffer.is_empty(), "header must be the first content");
    buffer.push_str(header);
}
