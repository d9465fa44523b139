//! # Markup
//!
//! The external, HTML-like representation of a [`Document`](crate::model::Document).
//!
//! - **`tags`**: element names shared by both directions
//! - **`serializer`**: `to_markup()` renders a document
//! - **`reader`**: `parse_markup()` reads the serializer's subset back, so
//!   markup produced here can be re-ingested without going through the text
//!   grammar
//!
//! For a normalized document `d`, `parse_markup(&to_markup(&d)) == d`.

pub mod reader;
pub mod serializer;
pub mod tags;

pub use reader::{looks_like_markup, parse_markup};
pub use serializer::to_markup;
