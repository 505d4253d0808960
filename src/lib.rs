// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

/*!
Merge a list of C++ source files into a single file.

That's useful for programming contest judges that take a single source
file. The files are concatenated in the order given by a manifest, after
dropping their include guards and `#include "..."` lines, with a fixed
block of GCC optimisation directives on top.

```no_run
use cppsourcebundler::{Bundler, Config};

let config = Config::default();
let bundle = Bundler::new(&config).run()?;
println!("{} files bundled", bundle.files());
# Ok::<(), cppsourcebundler::BundleError>(())
```
*/

pub mod bundler;
pub mod config;
pub mod error;
pub mod filter;
pub mod header;
pub mod manifest;

pub use bundler::{Bundle, Bundler, SourceFile};
pub use config::Config;
pub use error::BundleError;
pub use filter::FilterMode;
pub use manifest::Manifest;
