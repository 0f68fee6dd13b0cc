//! Classification of word tokens into literal words, numbers, and ranges

use crate::language::Expression;
use crate::regex::*;

/// Decide what a raw word token from a template denotes. This never fails;
/// anything that is not recognizably a number or a range of numbers is a
/// literal word. Digits that do not fit an `i64` are a word too.
pub fn classify(raw: &str) -> Expression {
    let text = raw.trim();
    let text = remove_escapes(text);
    let text = remove_quotes(&text);

    if let Some(value) = parse_number(text) {
        return Expression::Number(value);
    }

    if let Some(range) = parse_range(text) {
        return range;
    }

    Expression::Word(text.to_string())
}

/// Replace each backslash-escaped character with the character itself. A
/// trailing backslash with nothing after it is kept.
pub fn remove_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => result.push(escaped),
                None => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Strip one pair of matching quotes, but only if they wrap the whole text.
pub fn remove_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn parse_number(text: &str) -> Option<i64> {
    let re = regex!(r"^[+-]?[0-9]+$");

    if !re.is_match(text) {
        return None;
    }

    text.parse()
        .ok()
}

fn parse_range(text: &str) -> Option<Expression> {
    let re = regex!(r"^(-?[0-9]+)\.\.(-?[0-9]+)(?:\.\.([0-9]+))?$");

    let cap = re.captures(text)?;

    let lower = cap
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    let upper = cap
        .get(2)?
        .as_str()
        .parse()
        .ok()?;
    let step = match cap.get(3) {
        Some(step) => step
            .as_str()
            .parse()
            .ok()?,
        None => 1,
    };

    Some(Expression::range(lower, upper, step))
}
