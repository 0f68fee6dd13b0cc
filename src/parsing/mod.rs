//! compiler for sentence templates

use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::language::{LoadingError, Sentence};

pub mod builder;
pub mod events;
pub mod grammar;
mod stack;

pub use builder::{BuildError, Builder};
pub use events::Event;
pub use grammar::ParsingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The template text is malformed.
    Syntax(ParsingError),
    /// The events handed to the builder were not properly nested.
    Internal(BuildError),
}

impl CompileError {
    /// Where in the source the problem lies, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CompileError::Syntax(error) => Some(error.offset()),
            CompileError::Internal(_) => None,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax(error) => write!(f, "{}", error),
            CompileError::Internal(error) => write!(f, "internal error: {}", error),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Syntax(error) => Some(error),
            CompileError::Internal(error) => Some(error),
        }
    }
}

impl From<ParsingError> for CompileError {
    fn from(error: ParsingError) -> Self {
        CompileError::Syntax(error)
    }
}

impl From<BuildError> for CompileError {
    fn from(error: BuildError) -> Self {
        CompileError::Internal(error)
    }
}

/// Compile template lines into sentences, one per non-blank line, in the
/// order given.
pub fn compile<I, S>(lines: I) -> Result<Vec<Sentence>, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for (i, line) in lines
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text.push('\n');

    compile_text(&text)
}

/// Compile a whole document of templates.
pub fn compile_text(text: &str) -> Result<Vec<Sentence>, CompileError> {
    if text
        .trim()
        .is_empty()
    {
        debug!("No templates to compile");
        return Ok(Vec::new());
    }

    let tree = grammar::parse_tree(text)?;

    let mut builder = Builder::new();
    events::walk(&tree, &mut |event| builder.handle(event))?;

    let sentences = builder.finish()?;
    debug!(
        "Compiled {} sentence{}",
        sentences.len(),
        if sentences.len() == 1 { "" } else { "s" }
    );

    Ok(sentences)
}

/// Read a file and return an owned String. A filename of "-" reads standard
/// input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Compile the templates in a file's content. Errors carry an offset into
/// `content`; locating and describing them is up to the caller.
pub fn parse(filename: &Path, content: &str) -> Result<Vec<Sentence>, CompileError> {
    match compile_text(content) {
        Ok(sentences) => {
            if sentences.is_empty() {
                debug!("No templates found in {}", filename.display());
            } else {
                info!(
                    "Found {} template{} in {}",
                    sentences.len(),
                    if sentences.len() == 1 { "" } else { "s" },
                    filename.display()
                );
            }
            Ok(sentences)
        }
        Err(error) => {
            debug!(%error, "Failed compiling {}", filename.display());
            Err(error)
        }
    }
}
