use crate::problem::Present;
use phrasing::{
    formatting::{Render, Syntax},
    language::*,
    parsing::{BuildError, CompileError, ParsingError},
};

/// Generate problem and detail messages for compile errors
pub fn generate_error_message(error: &CompileError, renderer: &dyn Render) -> (String, String) {
    match error {
        CompileError::Syntax(error) => syntax_message(error, renderer),
        CompileError::Internal(error) => internal_message(error),
    }
}

fn syntax_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::UnclosedGroup(_) | ParsingError::UnclosedOptional(_) => {
            let examples = vec![
                Sequence::new(
                    SequenceKind::Alternative,
                    vec![Expression::word("on"), Expression::word("off")],
                ),
                Sequence::new(
                    SequenceKind::Alternative,
                    vec![Expression::word("the"), Expression::empty()],
                ),
            ];

            (
                match error {
                    ParsingError::UnclosedGroup(_) => "Unclosed group".to_string(),
                    _ => "Unclosed optional".to_string(),
                },
                format!(
                    r#"
Groups and optional spans must be closed on the same line they are opened,
for example:

    {}
    {}

A template cannot continue onto the next line; each line is a separate
sentence.
                    "#,
                    examples[0].present(renderer),
                    examples[1].present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnexpectedClosing(_, c) => (
            format!("Unexpected '{}'", c),
            format!(
                r#"
There is no {} open at this point for {} to close. If the character is meant
literally, escape it with a backslash as in {}.
                "#,
                describe_opening(*c),
                renderer.style(Syntax::Structure, &c.to_string()),
                renderer.style(Syntax::Word, &format!("\\{}", c))
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MismatchedClosing(_, found, expected) => (
            format!("Expected '{}' but found '{}'", expected, found),
            format!(
                r#"
Groups and optional spans must be closed in the reverse order they were
opened. The innermost one still open at this point needs {}.
                "#,
                renderer.style(Syntax::Structure, &expected.to_string())
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::AlternationOutsideGroup(_) => {
            let example = Expression::Sequence(Sequence::new(
                SequenceKind::Alternative,
                vec![Expression::word("lock"), Expression::word("unlock")],
            ));

            (
                "Alternative outside of a group".to_string(),
                format!(
                    r#"
The {} separating alternatives can only be used within a group or an optional
span, so that it is clear which words the choice is between:

    {} the door
                    "#,
                    renderer.style(Syntax::Operator, "|"),
                    example.present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnclosedReference(_, c) => (
            format!("Reference missing closing '{}'", c),
            format!(
                r#"
References to other rules are written {} and references to slot lists are
written {}; the closing character must be on the same line.
                "#,
                Expression::rule("name").present(renderer),
                Expression::list("area").present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::EmptyReference(_) => (
            "Empty reference".to_string(),
            format!(
                "A reference needs the name of the rule or list it refers to, as in {}.",
                Expression::list("area").present(renderer)
            ),
        ),
        ParsingError::InvalidReference(_, c) => (
            format!("Invalid character '{}' in reference", c),
            "Names of rules and lists cannot contain brackets, braces, or '|'.".to_string(),
        ),
        ParsingError::UnterminatedQuote(_) => (
            "Unterminated quote".to_string(),
            format!(
                r#"
A quoted word such as {} must end with a closing double quote on the same
line. A double quote inside it can be escaped with a backslash.
                "#,
                Expression::word("living room").present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::DanglingEscape(_) => (
            "Nothing to escape".to_string(),
            "A backslash escapes the character following it, but there is none.".to_string(),
        ),
    }
}

fn internal_message(error: &BuildError) -> (String, String) {
    (
        format!("Internal error: {}", error),
        "The template compiler reached an inconsistent state. This should not have happened! Sorry."
            .to_string(),
    )
}

fn describe_opening(c: char) -> &'static str {
    match c {
        ')' => "group",
        ']' => "optional span",
        '>' => "rule reference",
        '}' => "list reference",
        _ => "construct",
    }
}
