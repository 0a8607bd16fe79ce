//! # glux-gen
//!
//! The generation pipeline: validate the `@Font` request, resolve the font asset
//! directory, turn `FontFamily-Style.ext` file names into constants and emit the
//! `Font` Java class.
//!
//! - **Trigger**: exactly one marker, on a class, with a valid `packageName`
//! - **Locator**: explicit fonts directory, or the legacy anchor walk
//! - **Names**: two-segment file names, collision-free constant names
//! - **Emitter**: deterministic Java rendering, atomic write

pub mod emitter;
pub mod locator;
pub mod names;
pub mod pipeline;
pub mod trigger;
pub mod writer;

// Re-export main types for convenience
pub use emitter::{GeneratedUnit, JavaMethod, JavaType};
pub use locator::{AssetLocation, FONTS_SUBDIR};
pub use names::{parse_font_name, read_font_assets};
pub use pipeline::{GenerationPass, PassMode, PassReport, PassState, list_fonts};
pub use trigger::detect_request;
pub use writer::{WriteOutcome, write_unit};
