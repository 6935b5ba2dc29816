//! # Block Kinds
//!
//! Block-specific types that own their syntax markers. The classifier asks
//! these types whether a line opens their block; it never hardcodes `#`,
//! `---`, `- ` or `>` itself.

pub mod block_quote;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list::{ListKind, ListMarker};
pub use thematic_break::ThematicBreak;
