//! Structural events produced by walking a parse tree in document order.

use std::convert::Infallible;

use super::grammar::{Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'i> {
    EnterSentence(&'i str),
    ExitSentence,
    EnterGroup,
    ExitGroup,
    EnterOptional,
    ExitOptional,
    Alternation,
    RuleReference(&'i str),
    ListReference(&'i str),
    Word(&'i str),
}

/// Depth-first traversal of the parse tree, handing each event to `visit` in
/// the order the constructs appear. Stops at the first error `visit` returns.
pub fn walk<'i, E, F>(node: &Node<'i>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(Event<'i>) -> Result<(), E>,
{
    let (enter, exit) = match node.kind {
        NodeKind::Document => (None, None),
        NodeKind::Sentence(text) => (Some(Event::EnterSentence(text)), Some(Event::ExitSentence)),
        NodeKind::Group => (Some(Event::EnterGroup), Some(Event::ExitGroup)),
        NodeKind::Optional => (Some(Event::EnterOptional), Some(Event::ExitOptional)),
        NodeKind::Alternation => (Some(Event::Alternation), None),
        NodeKind::RuleReference(name) => (Some(Event::RuleReference(name)), None),
        NodeKind::ListReference(name) => (Some(Event::ListReference(name)), None),
        NodeKind::Word(text) => (Some(Event::Word(text)), None),
    };

    if let Some(event) = enter {
        visit(event)?;
    }

    for child in &node.children {
        walk(child, visit)?;
    }

    if let Some(event) = exit {
        visit(event)?;
    }

    Ok(())
}

/// Collect the full event stream for a parse tree.
pub fn events<'i>(node: &Node<'i>) -> Vec<Event<'i>> {
    let mut result = Vec::new();
    let walked = walk(node, &mut |event| -> Result<(), Infallible> {
        result.push(event);
        Ok(())
    });
    match walked {
        Ok(()) => result,
        Err(never) => match never {},
    }
}
