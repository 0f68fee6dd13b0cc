//! Compile sentence templates into expression trees for intent recognition.
//!
//! A template is a line of words, `(groups)`, `[optional]` spans,
//! alternatives separated by `|`, numbers and `1..10` ranges, `<rule>`
//! references, and `{list}` references:
//!
//! ```
//! let sentences = phrasing::parsing::compile(["turn on [the] light"]).unwrap();
//! assert_eq!(sentences.len(), 1);
//! assert_eq!(sentences[0].items().len(), 4);
//! ```

pub mod error;
pub mod formatting;
pub mod language;
pub mod parsing;
mod regex;
