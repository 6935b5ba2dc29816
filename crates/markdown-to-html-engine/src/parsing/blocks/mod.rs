//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from its leading characters alone
//!
//! 2. **Tree Construction** (`builder`): a `BlockBuilder` tracks the active
//!    root-level block and opens, continues or closes tree nodes per line
//!
//! ## Modules
//!
//! - **`kinds`**: block types that own their markers (Heading, ThematicBreak, ListMarker, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for tree construction
//!
//! ## Key Invariants
//!
//! - A line is fully consumed before the next one is classified
//! - Lists only ever grow while consecutive items share a kind; once closed
//!   a list is never reopened
//! - Root-level blocks are separated by exactly one newline text node

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
