//! # Inline Parsing
//!
//! Toggle-based inline scanning over one line of block content.
//!
//! ## Architecture
//!
//! The scanner walks the line byte by byte with a [`Cursor`] and mutates the
//! tree at a single insertion point:
//! - a marker whose container is not open above the insertion point opens
//!   one and moves inside it
//! - a marker whose container *is* open moves the insertion point to that
//!   container's parent
//! - two spaces append a line break
//! - anything else extends the current text leaf
//!
//! Different marker kinds are not checked for balanced nesting. Overlapping
//! input such as `*a**b*c**` produces whatever the toggles produce.
//!
//! ## Modules
//!
//! - **`kinds`**: `Marker` (strong, emphasis, code, strikethrough) and `HardBreak`
//! - **`parser`**: `scan_inline()` entry point
//!
//! [`Cursor`]: crate::parsing::cursor::Cursor

pub mod kinds;
pub mod parser;

pub use parser::scan_inline;
