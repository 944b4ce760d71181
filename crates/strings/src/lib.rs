#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Pure string utilities: spreadsheet column titles and last-word scanning.
//!
//! Contract: every function is deterministic, allocation is limited to the
//! returned value, and invalid input is reported through a `Result` instead
//! of a panic.
//!
//! - `column` — bijective base-26 titles ("A" = 1, "Z" = 26, "AA" = 27)
//! - `last_word` — length of the trailing space-delimited word

pub mod column;
pub mod last_word;

pub use column::{convert_to_title, title_to_number, TitleError};
pub use last_word::{last_word, length_of_last_word};
