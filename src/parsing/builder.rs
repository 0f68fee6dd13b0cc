//! Builds compiled sentences from the stream of structural events.
//!
//! Groups and optionals open a new scope on the sequence stack. An
//! alternation separator rewrites the enclosing group or optional into an
//! alternative in place (keeping what was accumulated so far as its first
//! branch) and starts a fresh branch that subsequent items attach to. On
//! closing, an optional becomes an alternative with an extra empty branch.

use std::fmt;
use tracing::trace;

use crate::language::{classify, Expression, Sentence, Sequence};

use super::events::Event;
use super::stack::SequenceStack;

/// The event stream violated the nesting the builder relies on. This is a
/// defect in whatever produced the events, not a problem with the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    NoSentence,
    SentenceAlreadyOpen,
    EmptyStack,
    MarkerOnTop,
    MissingMarker,
    EmptyScope,
    BadStack,
    UnbalancedScopes(usize),
    UnfinishedSentence,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoSentence => write!(f, "no sentence started"),
            BuildError::SentenceAlreadyOpen => write!(f, "sentence started before previous one ended"),
            BuildError::EmptyStack => write!(f, "no target sequence"),
            BuildError::MarkerOnTop => write!(f, "invalid target sequence"),
            BuildError::MissingMarker => write!(f, "missing group marker"),
            BuildError::EmptyScope => write!(f, "no sequence opened the current scope"),
            BuildError::BadStack => write!(f, "bad sequence stack"),
            BuildError::UnbalancedScopes(open) => {
                write!(f, "sentence ended with {} scope(s) still open", open)
            }
            BuildError::UnfinishedSentence => write!(f, "sentence started but never ended"),
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Default)]
pub struct Builder {
    sentences: Vec<Sentence>,
    current: Option<String>,
    stack: SequenceStack,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            sentences: Vec::new(),
            current: None,
            stack: SequenceStack::new(),
        }
    }

    /// Sentences sealed so far.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Hand over the sentences built. Fails if a sentence is still open.
    pub fn finish(self) -> Result<Vec<Sentence>, BuildError> {
        if self
            .current
            .is_some()
        {
            return Err(BuildError::UnfinishedSentence);
        }
        Ok(self.sentences)
    }

    pub fn handle(&mut self, event: Event<'_>) -> Result<(), BuildError> {
        if self
            .current
            .is_none()
            && !matches!(event, Event::EnterSentence(_))
        {
            return Err(BuildError::NoSentence);
        }

        match event {
            Event::EnterSentence(text) => self.enter_sentence(text),
            Event::ExitSentence => self.exit_sentence(),
            Event::EnterGroup | Event::EnterOptional => {
                // an optional starts out as a group, converted when it closes
                self.stack
                    .push_scope(Sequence::group());
                Ok(())
            }
            Event::ExitGroup => {
                let group = self
                    .stack
                    .pop_scope()?;
                self.attach(group.into())
            }
            Event::ExitOptional => {
                let mut optional = self
                    .stack
                    .pop_scope()?;

                optional.convert_to_alternative(false);
                optional
                    .items
                    .push(Expression::empty());

                self.attach(optional.into())
            }
            Event::Alternation => {
                let scope = self
                    .stack
                    .enclosing_target()?;

                if !scope.is_alternative() {
                    trace!(items = scope.items.len(), "converting scope to alternative");
                }
                scope.convert_to_alternative(true);

                self.stack
                    .push_branch(Sequence::group());
                Ok(())
            }
            Event::RuleReference(name) => self.attach(Expression::rule(name)),
            Event::ListReference(name) => self.attach(Expression::list(name)),
            Event::Word(raw) => self.attach(classify(raw)),
        }
    }

    fn enter_sentence(&mut self, text: &str) -> Result<(), BuildError> {
        if self
            .current
            .is_some()
        {
            return Err(BuildError::SentenceAlreadyOpen);
        }

        self.current = Some(text.to_string());
        self.stack
            .reset(Sequence::group());
        Ok(())
    }

    fn exit_sentence(&mut self) -> Result<(), BuildError> {
        let root = self
            .stack
            .take_root()?;
        let text = self
            .current
            .take()
            .ok_or(BuildError::NoSentence)?;

        self.sentences
            .push(Sentence {
                text,
                root: root.seal(),
            });
        Ok(())
    }

    fn attach(&mut self, expression: Expression) -> Result<(), BuildError> {
        self.stack
            .current_target()?
            .items
            .push(expression);
        Ok(())
    }
}
