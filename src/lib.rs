#![doc = r#"
favgen: turn a logo into favicon PNGs.

The crate crops an image to its visible content, centers that content on a
transparent square canvas and renders it at favicon sizes (16x16 and 128x128)
with a Lanczos3 filter. It powers the `favgen` CLI and can be embedded in your
own Rust applications.

Quick start: write favicons beside a logo
-----------------------------------------
```rust,no_run
use std::path::Path;
use favgen::{generate_favicons, Generation};

fn main() -> favgen::Result<()> {
    match generate_favicons(Path::new("assets/logo_original.png"))? {
        Generation::Created(files) => {
            for f in files {
                println!("{} -> {}", f.size, f.path.display());
            }
        }
        Generation::NoContent => println!("nothing to crop"),
    }
    Ok(())
}
```

Render in memory
----------------
```rust
use favgen::{render_favicons, ContentRule, FaviconParams, FaviconSize};
use image::{Rgba, RgbaImage};

let mut logo = RgbaImage::new(64, 32);
for x in 8..40 {
    for y in 4..20 {
        logo.put_pixel(x, y, Rgba([0, 0, 0, 255]));
    }
}

let params = FaviconParams {
    sizes: vec![FaviconSize::Px16],
    content_rule: ContentRule::Alpha,
};
let favicons = render_favicons(&logo, &params).unwrap().unwrap();
assert_eq!(favicons[0].rgba.len(), 16 * 16 * 4);
```

Error handling
--------------
All public functions return `favgen::Result<T>`. A missing source maps to
`Error::NotFound`; an image without content is not an error and comes back as
`Generation::NoContent` (or `None` from the render helpers).

```rust,no_run
use std::path::Path;
use favgen::{generate_favicons, Error};

match generate_favicons(Path::new("missing.png")) {
    Ok(_) => {}
    Err(Error::NotFound { path }) => eprintln!("no such file: {}", path.display()),
    Err(other) => eprintln!("failed: {other}"),
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`types`]: `FaviconSize`, `ContentRule`, `BoundingBox`.
- [`io`]: source reader and PNG writer.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::FaviconParams;
pub use crate::error::{Error, Result};
pub use crate::types::{BoundingBox, ContentRule, FaviconSize};

// Building blocks
pub use crate::core::processing::bounds::content_bounds;
pub use crate::core::processing::padding::crop_to_square;
pub use crate::core::processing::resize::resize_square;
pub use crate::io::reader::load_rgba;

// High-level API re-exports
pub use crate::api::{
    Favicon, Generation, WrittenFavicon, generate_favicons, generate_favicons_with_params,
    generate_favicons_with_progress, output_dir_for, render_favicons, render_file, write_favicon,
};

/// Source path used when the CLI is run without arguments.
pub const DEFAULT_SOURCE: &str = "logo_original.png";
