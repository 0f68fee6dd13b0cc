//! Types representing a compiled sentence template

use serde::Serialize;

/// How the items of a [`Sequence`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Items are concatenated in order.
    Group,
    /// Exactly one of the items applies.
    Alternative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub kind: SequenceKind,
    pub items: Vec<Expression>,
}

/// An inclusive range of integers, stepping from `lower` towards `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberRange {
    pub lower: i64,
    pub upper: i64,
    pub step: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Word(String),
    Number(i64),
    NumberRange(NumberRange),
    ListReference(String),
    RuleReference(String),
    Sequence(Sequence),
}

/// One compiled template line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub root: Sequence,
}

impl Sequence {
    pub fn new(kind: SequenceKind, items: Vec<Expression>) -> Sequence {
        Sequence { kind, items }
    }

    pub fn group() -> Sequence {
        Sequence::new(SequenceKind::Group, Vec::new())
    }

    pub fn is_alternative(&self) -> bool {
        self.kind == SequenceKind::Alternative
    }

    /// Whether this is the form an optional span compiles to, an alternative
    /// whose last branch matches nothing.
    pub fn is_optional(&self) -> bool {
        self.is_alternative()
            && self
                .items
                .last()
                .map_or(false, Expression::is_empty)
    }

    /// Turn this sequence into an alternative. Anything accumulated so far
    /// becomes the first branch, wrapped in a group.
    pub(crate) fn convert_to_alternative(&mut self, wrap_single: bool) {
        if self.kind == SequenceKind::Alternative {
            return;
        }

        let wrap = if wrap_single {
            !self
                .items
                .is_empty()
        } else {
            self.items
                .len()
                > 1
        };

        if wrap {
            let items = std::mem::take(&mut self.items);
            self.items
                .push(Expression::Sequence(Sequence::new(SequenceKind::Group, items)));
        }

        self.kind = SequenceKind::Alternative;
    }

    /// Finalize scaffolding built during parsing. A branch of an alternative
    /// that is a group of exactly one expression is replaced by that
    /// expression.
    pub(crate) fn seal(self) -> Sequence {
        let kind = self.kind;
        let items = self
            .items
            .into_iter()
            .map(|item| match item {
                Expression::Sequence(inner) => {
                    let inner = inner.seal();
                    if kind == SequenceKind::Alternative
                        && inner.kind == SequenceKind::Group
                        && inner
                            .items
                            .len()
                            == 1
                    {
                        let mut items = inner.items;
                        items
                            .pop()
                            .unwrap_or_else(Expression::empty)
                    } else {
                        Expression::Sequence(inner)
                    }
                }
                other => other,
            })
            .collect();

        Sequence { kind, items }
    }

    pub fn list_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names, |expression| match expression {
            Expression::ListReference(name) => Some(name.as_str()),
            _ => None,
        });
        names
    }

    pub fn rule_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names, |expression| match expression {
            Expression::RuleReference(name) => Some(name.as_str()),
            _ => None,
        });
        names
    }

    fn collect_names<'a>(
        &'a self,
        names: &mut Vec<&'a str>,
        select: fn(&Expression) -> Option<&str>,
    ) {
        for item in &self.items {
            match item {
                Expression::Sequence(inner) => inner.collect_names(names, select),
                leaf => {
                    if let Some(name) = select(leaf) {
                        names.push(name);
                    }
                }
            }
        }
    }
}

impl Expression {
    pub fn word(text: impl Into<String>) -> Expression {
        Expression::Word(text.into())
    }

    /// The branch of an optional span that matches nothing.
    pub fn empty() -> Expression {
        Expression::Word(String::new())
    }

    pub fn number(value: i64) -> Expression {
        Expression::Number(value)
    }

    pub fn range(lower: i64, upper: i64, step: i64) -> Expression {
        Expression::NumberRange(NumberRange { lower, upper, step })
    }

    pub fn list(name: impl Into<String>) -> Expression {
        Expression::ListReference(name.into())
    }

    pub fn rule(name: impl Into<String>) -> Expression {
        Expression::RuleReference(name.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expression::Word(text) if text.is_empty())
    }

    pub fn list_names(&self) -> Vec<&str> {
        match self {
            Expression::ListReference(name) => vec![name.as_str()],
            Expression::Sequence(sequence) => sequence.list_names(),
            _ => Vec::new(),
        }
    }

    pub fn rule_names(&self) -> Vec<&str> {
        match self {
            Expression::RuleReference(name) => vec![name.as_str()],
            Expression::Sequence(sequence) => sequence.rule_names(),
            _ => Vec::new(),
        }
    }
}

impl From<Sequence> for Expression {
    fn from(sequence: Sequence) -> Self {
        Expression::Sequence(sequence)
    }
}

impl Sentence {
    pub fn items(&self) -> &[Expression] {
        &self
            .root
            .items
    }

    pub fn list_names(&self) -> Vec<&str> {
        self.root
            .list_names()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.root
            .rule_names()
    }
}
