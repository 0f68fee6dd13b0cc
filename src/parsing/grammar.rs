//! Front-end for the template grammar. This turns template text into a
//! generic parse tree; it knows nothing about how that tree is compiled.

use std::fmt;

const DELIMITERS: [char; 9] = ['(', ')', '[', ']', '{', '}', '<', '>', '|'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<'i> {
    Document,
    Sentence(&'i str),
    Group,
    Optional,
    Alternation,
    RuleReference(&'i str),
    ListReference(&'i str),
    Word(&'i str),
}

/// A node of the parse tree. The offset is where the construct begins in the
/// original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'i> {
    pub kind: NodeKind<'i>,
    pub offset: usize,
    pub children: Vec<Node<'i>>,
}

impl<'i> Node<'i> {
    fn leaf(kind: NodeKind<'i>, offset: usize) -> Node<'i> {
        Node {
            kind,
            offset,
            children: Vec::new(),
        }
    }

    fn branch(kind: NodeKind<'i>, offset: usize, children: Vec<Node<'i>>) -> Node<'i> {
        Node {
            kind,
            offset,
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnclosedGroup(usize),
    UnclosedOptional(usize),
    UnexpectedClosing(usize, char),
    MismatchedClosing(usize, char, char),
    AlternationOutsideGroup(usize),
    UnclosedReference(usize, char),
    EmptyReference(usize),
    InvalidReference(usize, char),
    UnterminatedQuote(usize),
    DanglingEscape(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnclosedGroup(offset) => *offset,
            ParsingError::UnclosedOptional(offset) => *offset,
            ParsingError::UnexpectedClosing(offset, _) => *offset,
            ParsingError::MismatchedClosing(offset, _, _) => *offset,
            ParsingError::AlternationOutsideGroup(offset) => *offset,
            ParsingError::UnclosedReference(offset, _) => *offset,
            ParsingError::EmptyReference(offset) => *offset,
            ParsingError::InvalidReference(offset, _) => *offset,
            ParsingError::UnterminatedQuote(offset) => *offset,
            ParsingError::DanglingEscape(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnclosedGroup(_) => "unclosed group".to_string(),
            ParsingError::UnclosedOptional(_) => "unclosed optional".to_string(),
            ParsingError::UnexpectedClosing(_, c) => format!("unexpected '{}'", c),
            ParsingError::MismatchedClosing(_, found, expected) => {
                format!("expected '{}' but found '{}'", expected, found)
            }
            ParsingError::AlternationOutsideGroup(_) => {
                "alternative outside of a group or optional".to_string()
            }
            ParsingError::UnclosedReference(_, c) => format!("reference missing closing '{}'", c),
            ParsingError::EmptyReference(_) => "empty reference".to_string(),
            ParsingError::InvalidReference(_, c) => {
                format!("invalid character '{}' in reference", c)
            }
            ParsingError::UnterminatedQuote(_) => "unterminated quote".to_string(),
            ParsingError::DanglingEscape(_) => "nothing to escape".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

/// Parse a whole document of templates, one per line.
pub fn parse_tree(content: &str) -> Result<Node<'_>, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.read_document()
}

#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn peek(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    /// Skip whitespace, but not line breaks; they end a sentence.
    fn trim_whitespace(&mut self) {
        let remaining = self
            .source
            .trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
        let width = self.source.len() - remaining.len();
        self.advance(width);
    }

    fn current_line(&self) -> &'i str {
        match self
            .source
            .find('\n')
        {
            Some(i) => &self.source[..i],
            None => self.source,
        }
    }

    pub fn read_document(&mut self) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        let mut sentences = Vec::new();

        loop {
            self.trim_whitespace();

            match self.peek() {
                None => break,
                Some('\n') => self.advance(1),
                Some(_) => sentences.push(self.read_sentence()?),
            }
        }

        Ok(Node::branch(NodeKind::Document, start, sentences))
    }

    pub fn read_sentence(&mut self) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        let text = self
            .current_line()
            .trim();

        let items = self.read_items(None)?;

        if self.peek() == Some('\n') {
            self.advance(1);
        }

        Ok(Node::branch(NodeKind::Sentence(text), start, items))
    }

    /// Read items until the end of the line, or until the closing character
    /// of the enclosing group or optional (which is left for the caller to
    /// consume).
    fn read_items(&mut self, enclosing: Option<(char, usize)>) -> Result<Vec<Node<'i>>, ParsingError> {
        let mut items = Vec::new();

        loop {
            self.trim_whitespace();

            let c = match self.peek() {
                None | Some('\n') => {
                    return match enclosing {
                        None => Ok(items),
                        Some((')', start)) => Err(ParsingError::UnclosedGroup(start)),
                        Some((_, start)) => Err(ParsingError::UnclosedOptional(start)),
                    };
                }
                Some(c) => c,
            };

            match c {
                '(' => items.push(self.read_bracketed(NodeKind::Group, ')')?),
                '[' => items.push(self.read_bracketed(NodeKind::Optional, ']')?),
                ')' | ']' => {
                    return match enclosing {
                        Some((expected, _)) if expected == c => Ok(items),
                        Some((expected, _)) => Err(ParsingError::MismatchedClosing(
                            self.offset,
                            c,
                            expected,
                        )),
                        None => Err(ParsingError::UnexpectedClosing(self.offset, c)),
                    };
                }
                '|' => {
                    if enclosing.is_none() {
                        return Err(ParsingError::AlternationOutsideGroup(self.offset));
                    }
                    items.push(Node::leaf(NodeKind::Alternation, self.offset));
                    self.advance(1);
                }
                '<' => items.push(self.read_reference('>')?),
                '{' => items.push(self.read_reference('}')?),
                '>' | '}' => return Err(ParsingError::UnexpectedClosing(self.offset, c)),
                '"' => items.push(self.read_quoted()?),
                _ => items.push(self.read_word()?),
            }
        }
    }

    fn read_bracketed(&mut self, kind: NodeKind<'i>, closing: char) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        self.advance(1);

        let items = self.read_items(Some((closing, start)))?;

        // read_items() only returns successfully when sitting on the closing
        // character
        self.advance(1);

        Ok(Node::branch(kind, start, items))
    }

    fn read_reference(&mut self, closing: char) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        self.advance(1);

        for (i, c) in self
            .source
            .char_indices()
        {
            if c == closing {
                let name = self.source[..i].trim();
                if name.is_empty() {
                    return Err(ParsingError::EmptyReference(start));
                }

                self.advance(i + 1);

                let kind = if closing == '>' {
                    NodeKind::RuleReference(name)
                } else {
                    NodeKind::ListReference(name)
                };
                return Ok(Node::leaf(kind, start));
            } else if c == '\n' {
                break;
            } else if DELIMITERS.contains(&c) {
                return Err(ParsingError::InvalidReference(self.offset + i, c));
            }
        }

        Err(ParsingError::UnclosedReference(start, closing))
    }

    fn read_quoted(&mut self) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        let mut escaped = false;

        for (i, c) in self
            .source
            .char_indices()
            .skip(1)
        {
            if c == '\n' {
                break;
            } else if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                let token = &self.source[..i + 1];
                self.advance(i + 1);
                return Ok(Node::leaf(NodeKind::Word(token), start));
            }
        }

        Err(ParsingError::UnterminatedQuote(start))
    }

    fn read_word(&mut self) -> Result<Node<'i>, ParsingError> {
        let start = self.offset;
        let mut escaped = false;
        let mut width = self
            .source
            .len();

        for (i, c) in self
            .source
            .char_indices()
        {
            if escaped {
                if c == '\n' || c == '\r' {
                    return Err(ParsingError::DanglingEscape(self.offset + i - 1));
                }
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c.is_whitespace() || DELIMITERS.contains(&c) {
                width = i;
                break;
            }
        }

        if escaped {
            return Err(ParsingError::DanglingEscape(self.offset + width - 1));
        }

        let token = &self.source[..width];
        self.advance(width);

        Ok(Node::leaf(NodeKind::Word(token), start))
    }
}
