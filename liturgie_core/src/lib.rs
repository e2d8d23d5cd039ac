//! `liturgie_core` formats the references read out during a church service
//! and projects a service's texts into presentation templates.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Free text reference
//!   → Scripture / song formatter (canonical `Johannes 1 : 1, 3 en 5` style)
//!   → Text store (named fields, optionally formatted per config)
//!   → Lexer (splits mustache templates into text and tags)
//!   → Parser (matches sections into a node tree)
//!   → Renderer (resolves names, runs lambda helpers)
//!   → Projection (renders every `*.mustache` template to `*.html`)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `liturgie.toml` or
//!   `liturgie.json`.
//!
//! ## Key Types
//!
//! - [`ScriptureReference`] and [`SongReference`] — parsed references.
//! - [`TextStore`] and [`TextFieldValue`] — the named texts of a service.
//! - [`PositionLabel`] — slide position of a text block.
//! - [`Template`] and [`Renderer`] — the logic-less template language.
//! - [`TemplateConfig`] and [`FillReport`] — template projection.
//!
//! ## Quick Start
//!
//! ```rust
//! use liturgie_core::{format_scripture, format_song, format_songs};
//!
//! assert_eq!(format_scripture("Johannes 1:1,3,5"), "Johannes 1 : 1, 3 en 5");
//! assert_eq!(format_song("Psalm 18 : voorzang, 1, 2"), "Psalm 18 : VZ, 1 en 2");
//! assert_eq!(
//! 	format_songs(&["Gezang 12 : 4", "Psalm 8"]),
//! 	vec!["Gezang 12 : 4", "Psalm     8"],
//! );
//! ```

pub use config::*;
pub use encoding::*;
pub use engine::*;
pub use error::*;
pub use join::*;
pub use parser::*;
pub use position::*;
pub use projection::*;
pub use scripture::*;
pub use song::*;
pub use text_store::*;

pub mod config;
mod encoding;
mod engine;
#[allow(unused_assignments)]
mod error;
mod join;
pub(crate) mod lexer;
mod parser;
mod position;
mod projection;
mod scripture;
mod song;
mod text_store;
pub(crate) mod tokens;

#[cfg(test)]
mod __fixtures;
