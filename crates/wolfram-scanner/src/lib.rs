//! An incremental scanner for the Wolfram Language.
//!
//! The language has an operator grammar of two hundred odd token tags,
//! and nearly every token can be written three ways: as ASCII (`->`), as
//! a Unicode code point (`→` or a private-use character), or as a
//! backslash escape (`\[Rule]`, `\:f522`). Symbols may interleave escape
//! sequences (`abc\[Mu]1`), strings carry their own inner escape grammar,
//! comments nest, and a single token may span several fed lines.
//!
//! The pieces:
//!
//! - [`feed`] — the [`LineFeeder`] trait and its concrete feeders, which
//!   hand the tokenizer one logical line at a time and hold recorded
//!   diagnostics;
//! - [`escape`] — the pure escape-sequence decoder;
//! - [`Tokeniser`] — the state machine that turns fed lines into
//!   [`Token`]s, consulting the character tables from the
//!   `wolfram-characters` crate.
//!
//! ```
//! use wolfram_scanner::{SingleLineFeeder, TokenKind, Tokeniser};
//!
//! let mut feeder = SingleLineFeeder::new("f // x");
//! let mut tokeniser = Tokeniser::new(&mut feeder);
//! let mut kinds = Vec::new();
//! loop {
//!     let token = tokeniser.next_token().unwrap();
//!     if token.is_end() {
//!         break;
//!     }
//!     kinds.push(token.kind);
//! }
//! assert_eq!(kinds, [TokenKind::Symbol, TokenKind::Postfix, TokenKind::Symbol]);
//! ```

pub mod escape;
pub mod feed;

mod errors;
mod pattern;
mod token;
mod tokeniser;

pub use errors::{EscapeError, NumericEscapeTag, ScanError};
pub use feed::{FileLineFeeder, LineFeeder, Message, MultiLineFeeder, SingleLineFeeder};
pub use pattern::TokenTable;
pub use token::{Token, TokenKind};
pub use tokeniser::{is_symbol_name, Tokeniser};
