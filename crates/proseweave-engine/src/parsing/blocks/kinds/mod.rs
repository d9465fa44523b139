//! Block-specific types that own their line markers.
//!
//! - **`Heading`**: `MARKER = b'#'`, up to `MAX_DEPTH` repeats then a space
//! - **`ListItem`**: `MARKER = "- "`
//!
//! The classifier asks these types; it never hardcodes `#` or `- `.

pub mod heading;
pub mod list_item;

pub use heading::Heading;
pub use list_item::ListItem;
