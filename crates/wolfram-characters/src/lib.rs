//! Character database for the Wolfram Language.
//!
//! The Wolfram Language names several hundred characters (`\[Theta]`,
//! `\[RuleDelayed]`, …). Many of them live in the Unicode private-use area
//! and carry a separate "public" Unicode equivalent; some are letter-like
//! and may appear inside symbols; some are operators with a precedence and
//! a set of alternative spellings.
//!
//! This crate loads the two compiled tables (named characters and
//! operators) from their JSON documents, checks the consistency rules the
//! scanner relies on, and exposes the derived lookup tables:
//!
//! ```
//! use wolfram_characters::CharacterTables;
//!
//! let tables = CharacterTables::builtin();
//! assert_eq!(tables.named_character("Theta"), Some('\u{03b8}'));
//! assert!(tables.is_letterlike('\u{221e}')); // Infinity
//! ```
//!
//! All tables are immutable after a successful load and safe to share
//! between threads.

mod document;
mod letters;
mod tables;
mod translate;

pub use document::{Affix, Associativity, NamedCharacter, OperatorEntry};
pub use letters::is_wl_letter;
pub use tables::{CharacterTables, OperatorRecord, TableError};
