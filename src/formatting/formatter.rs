//! Code formatter turning compiled sentences back into template text

use crate::formatting::*;
use crate::language::*;

const DELIMITERS: [char; 9] = ['(', ')', '[', ']', '{', '}', '<', '>', '|'];

/// Break a sentence into fragments tagged with their syntax, in order.
pub fn format_with_renderer(sentence: &Sentence) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.format_items(
        &sentence
            .root
            .items,
    );
    output.fragments
}

/// Render a sentence as template text, styled by the given renderer.
pub fn render(sentence: &Sentence, renderer: &dyn Render) -> String {
    combine(format_with_renderer(sentence), renderer)
}

/// Render a single expression as it would appear within a template.
pub fn render_expression(expression: &Expression, renderer: &dyn Render) -> String {
    let mut output = Formatter::new();
    output.format_expression(expression, SequenceKind::Group);
    combine(output.fragments, renderer)
}

fn combine(fragments: Vec<(Syntax, String)>, renderer: &dyn Render) -> String {
    let mut result = String::new();
    for (syntax, content) in fragments {
        result.push_str(&renderer.style(syntax, &content));
    }
    result
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_items(&mut self, items: &[Expression]) {
        for (i, item) in items
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Neutral, " ");
            }
            self.format_expression(item, SequenceKind::Group);
        }
    }

    fn format_branches(&mut self, branches: &[Expression]) {
        for (i, branch) in branches
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Neutral, " ");
                self.append(Syntax::Operator, "|");
                self.append(Syntax::Neutral, " ");
            }
            self.format_expression(branch, SequenceKind::Alternative);
        }
    }

    /// Format an expression that is an item of a sequence of the given kind.
    fn format_expression(&mut self, expression: &Expression, parent: SequenceKind) {
        match expression {
            Expression::Word(text) => self.format_word(text),
            Expression::Number(value) => self.append(Syntax::Numeric, &value.to_string()),
            Expression::NumberRange(range) => {
                let text = if range.step == 1 {
                    format!("{}..{}", range.lower, range.upper)
                } else {
                    format!("{}..{}..{}", range.lower, range.upper, range.step)
                };
                self.append(Syntax::Numeric, &text);
            }
            Expression::RuleReference(name) => {
                self.append(Syntax::Structure, "<");
                self.append(Syntax::Rule, name);
                self.append(Syntax::Structure, ">");
            }
            Expression::ListReference(name) => {
                self.append(Syntax::Structure, "{");
                self.append(Syntax::List, name);
                self.append(Syntax::Structure, "}");
            }
            Expression::Sequence(sequence) => self.format_sequence(sequence, parent),
        }
    }

    fn format_sequence(&mut self, sequence: &Sequence, parent: SequenceKind) {
        match sequence.kind {
            SequenceKind::Group => {
                // a branch of an alternative is already delimited
                if parent == SequenceKind::Alternative {
                    self.format_items(&sequence.items);
                } else {
                    self.append(Syntax::Structure, "(");
                    self.format_items(&sequence.items);
                    self.append(Syntax::Structure, ")");
                }
            }
            SequenceKind::Alternative => {
                if sequence.is_optional() {
                    let branches = &sequence.items[..sequence.items.len() - 1];
                    self.append(Syntax::Structure, "[");
                    self.format_branches(branches);
                    self.append(Syntax::Structure, "]");
                } else {
                    self.append(Syntax::Structure, "(");
                    // a lone branch keeps its separator, else it reads back as a group
                    if sequence
                        .items
                        .len()
                        == 1
                    {
                        self.append(Syntax::Neutral, " ");
                        self.append(Syntax::Operator, "|");
                        self.append(Syntax::Neutral, " ");
                    }
                    self.format_branches(&sequence.items);
                    self.append(Syntax::Structure, ")");
                }
            }
        }
    }

    fn format_word(&mut self, text: &str) {
        if needs_quotes(text) {
            let mut quoted = String::from("\"");
            for c in text.chars() {
                if c == '"' || c == '\\' {
                    quoted.push('\\');
                }
                quoted.push(c);
            }
            quoted.push('"');
            self.append(Syntax::Quote, &quoted);
        } else {
            let mut escaped = String::new();
            for (i, c) in text
                .chars()
                .enumerate()
            {
                if c == '\\' || DELIMITERS.contains(&c) || (i == 0 && c == '"') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            self.append(Syntax::Word, &escaped);
        }
    }
}

/// Words that would not survive as a bare token: empty ones, ones with
/// whitespace, and ones that would otherwise lose wrapping quote characters.
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(char::is_whitespace)
        || remove_quotes(text) != text
}
