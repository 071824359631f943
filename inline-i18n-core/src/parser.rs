//! ICU message parser
//!
//! Recursive descent over the ICU MessageFormat grammar, producing an
//! [`ast::Message`](crate::ast::Message). Extension elements (`currency`,
//! `number, compact`, `relativeTime`, `list` and registered custom
//! formatters) are emitted as [`Node::Extension`] leaves.
//!
//! Quoting follows ICU's optional-apostrophe mode: `''` is a literal
//! apostrophe, an apostrophe before `{`, `}`, `<`, `>` (or `#` in a plural
//! body) starts a quoted section, and any other apostrophe is literal text.

use crate::ast::{ExtensionKind, Message, Node, PluralOption, PluralSelector, SelectOption};
use crate::datetime::{DateStyle, TimeStyle};
use crate::format::{CompactDisplay, NumberStyle};
use crate::formatter::FormatterMap;
use crate::list::{ListStyle, ListType};
use crate::plural::PluralType;
use crate::relative::RelativeTimeStyle;
use std::fmt;
use thiserror::Error;

/// A grammar error with the byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unclosed argument")]
    UnclosedArgument,

    #[error("empty argument name")]
    EmptyArgumentName,

    #[error("invalid argument name")]
    InvalidArgumentName,

    #[error("malformed argument")]
    MalformedArgument,

    #[error("missing argument type")]
    MissingArgumentType,

    #[error("unknown argument type '{0}'")]
    UnknownArgumentType(String),

    #[error("invalid argument style")]
    InvalidStyle,

    #[error("missing options")]
    MissingOptions,

    #[error("invalid selector")]
    InvalidSelector,

    #[error("duplicate selector '{0}'")]
    DuplicateSelector(String),

    #[error("expected '{{' after selector '{0}'")]
    MissingOptionBody(String),

    #[error("unclosed option body")]
    UnclosedOptionBody,

    #[error("invalid offset")]
    InvalidOffset,

    #[error("unterminated quoted literal")]
    UnterminatedQuote,
}

/// Extension element names known to the parser.
///
/// Registered custom formatter names take precedence over the built-in
/// extensions; the built-ins are always recognized.
#[derive(Clone, Copy, Default)]
pub struct ExtensionSyntax<'a> {
    custom: Option<&'a FormatterMap>,
}

impl<'a> ExtensionSyntax<'a> {
    /// Recognize the formatters in `custom` as element types.
    pub fn new(custom: &'a FormatterMap) -> Self {
        Self {
            custom: Some(custom),
        }
    }

    /// Whether `name` is a registered custom formatter.
    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.is_some_and(|map| map.contains_key(name))
    }
}

impl fmt::Debug for ExtensionSyntax<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self
            .custom
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        f.debug_struct("ExtensionSyntax")
            .field("custom", &names)
            .finish()
    }
}

/// Parse a message template.
///
/// ```
/// use inline_i18n_core::ast::Node;
/// use inline_i18n_core::parser::{parse, ExtensionSyntax};
///
/// let message = parse("Hello {name}!", ExtensionSyntax::default()).unwrap();
/// assert_eq!(
///     message,
///     vec![
///         Node::Literal("Hello ".into()),
///         Node::Argument("name".into()),
///         Node::Literal("!".into()),
///     ]
/// );
/// ```
pub fn parse(template: &str, syntax: ExtensionSyntax<'_>) -> Result<Message, ParseError> {
    let mut parser = Parser {
        src: template,
        pos: 0,
        syntax,
    };
    parser.parse_message(false, Context::Message)
}

/// Kind of body being parsed; `#` is only special in plural bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Message,
    Plural,
    Select,
}

struct Parser<'s, 'a> {
    src: &'s str,
    pos: usize,
    syntax: ExtensionSyntax<'a>,
}

fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !(c.is_ascii_punctuation() && c != '_')
}

impl<'s> Parser<'s, '_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError { kind, offset }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let src = self.src;
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &src[start..self.pos]
    }

    /// Parse text and elements until the end of input, or until a `}` when
    /// `nested`. The closing brace is left for the caller.
    fn parse_message(&mut self, nested: bool, context: Context) -> Result<Message, ParseError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '{' => {
                    flush(&mut text, &mut nodes);
                    nodes.push(self.parse_argument()?);
                }
                '}' if nested => break,
                '#' if context == Context::Plural => {
                    self.bump();
                    flush(&mut text, &mut nodes);
                    nodes.push(Node::Pound);
                }
                '\'' => self.parse_apostrophe(context, &mut text)?,
                _ => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        flush(&mut text, &mut nodes);
        Ok(nodes)
    }

    fn parse_apostrophe(&mut self, context: Context, text: &mut String) -> Result<(), ParseError> {
        let start = self.pos;
        self.bump();

        match self.peek() {
            Some('\'') => {
                self.bump();
                text.push('\'');
            }
            Some('{' | '}' | '<' | '>') => self.parse_quoted(start, text)?,
            Some('#') if context == Context::Plural => self.parse_quoted(start, text)?,
            _ => text.push('\''),
        }
        Ok(())
    }

    fn parse_quoted(&mut self, start: usize, text: &mut String) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnterminatedQuote, start)),
                Some('\'') => {
                    self.bump();
                    if self.peek() == Some('\'') {
                        self.bump();
                        text.push('\'');
                    } else {
                        return Ok(());
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }
    }

    fn parse_argument(&mut self) -> Result<Node, ParseError> {
        let open = self.pos;
        self.bump();
        self.skip_whitespace();

        let name_start = self.pos;
        let name = self.take_while(is_identifier_char).to_string();
        if name.is_empty() {
            let kind = match self.peek() {
                None => ParseErrorKind::UnclosedArgument,
                Some('}' | ',') => ParseErrorKind::EmptyArgumentName,
                Some(_) => ParseErrorKind::InvalidArgumentName,
            };
            return Err(self.error(kind, name_start));
        }

        self.skip_whitespace();
        match self.peek() {
            Some('}') => {
                self.bump();
                return Ok(Node::Argument(name));
            }
            Some(',') => self.bump(),
            None => return Err(self.error(ParseErrorKind::UnclosedArgument, open)),
            Some(_) => return Err(self.error(ParseErrorKind::MalformedArgument, self.pos)),
        }

        self.skip_whitespace();
        let type_start = self.pos;
        let arg_type = self.take_while(is_identifier_char).to_string();
        if arg_type.is_empty() {
            let kind = match self.peek() {
                None => ParseErrorKind::UnclosedArgument,
                _ => ParseErrorKind::MissingArgumentType,
            };
            return Err(self.error(kind, type_start));
        }
        self.skip_whitespace();

        if self.syntax.is_custom(&arg_type) {
            let style = self.parse_style(open)?;
            return Ok(Node::Extension {
                kind: ExtensionKind::Custom {
                    formatter: arg_type,
                    style,
                },
                name,
            });
        }

        let node = match arg_type.as_str() {
            "plural" => self.parse_plural(name, PluralType::Cardinal, open)?,
            "selectordinal" => self.parse_plural(name, PluralType::Ordinal, open)?,
            "select" => self.parse_select(name, open)?,
            "number" => {
                let style = self.parse_style(open)?;
                match style.as_deref() {
                    Some("compact") => Node::Extension {
                        kind: ExtensionKind::Compact(CompactDisplay::Short),
                        name,
                    },
                    Some("compactLong") => Node::Extension {
                        kind: ExtensionKind::Compact(CompactDisplay::Long),
                        name,
                    },
                    style => Node::Number {
                        name,
                        style: NumberStyle::parse(style),
                    },
                }
            }
            "date" => {
                let style = self.parse_style(open)?;
                Node::Date {
                    name,
                    style: DateStyle::parse(style.as_deref()),
                }
            }
            "time" => {
                let style = self.parse_style(open)?;
                Node::Time {
                    name,
                    style: TimeStyle::parse(style.as_deref()),
                }
            }
            "currency" => {
                let code = self.parse_style(open)?.unwrap_or_else(|| "USD".to_string());
                Node::Extension {
                    kind: ExtensionKind::Currency(code),
                    name,
                }
            }
            "relativeTime" => {
                let style = self.parse_style(open)?;
                Node::Extension {
                    kind: ExtensionKind::RelativeTime(RelativeTimeStyle::parse(style.as_deref())),
                    name,
                }
            }
            "list" => {
                let style = self.parse_style(open)?;
                let mut parts = style.as_deref().unwrap_or("").split(',').map(str::trim);
                let list_type = ListType::parse(parts.next());
                let list_style = ListStyle::parse(parts.next());
                Node::Extension {
                    kind: ExtensionKind::List(list_type, list_style),
                    name,
                }
            }
            _ => {
                return Err(self.error(
                    ParseErrorKind::UnknownArgumentType(arg_type.clone()),
                    type_start,
                ));
            }
        };

        Ok(node)
    }

    /// Parse `}` or `, style}` after an argument type.
    fn parse_style(&mut self, open: usize) -> Result<Option<String>, ParseError> {
        match self.peek() {
            Some('}') => {
                self.bump();
                return Ok(None);
            }
            Some(',') => self.bump(),
            None => return Err(self.error(ParseErrorKind::UnclosedArgument, open)),
            Some(_) => return Err(self.error(ParseErrorKind::MalformedArgument, self.pos)),
        }

        let style_start = self.pos;
        let mut style = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnclosedArgument, open)),
                Some('}') => {
                    self.bump();
                    break;
                }
                Some('{') => return Err(self.error(ParseErrorKind::InvalidStyle, self.pos)),
                Some('\'') => self.parse_apostrophe(Context::Message, &mut style)?,
                Some(c) => {
                    style.push(c);
                    self.bump();
                }
            }
        }

        let style = style.trim();
        if style.is_empty() {
            return Err(self.error(ParseErrorKind::InvalidStyle, style_start));
        }
        Ok(Some(style.to_string()))
    }

    /// Expect the `,` that introduces plural/select options.
    fn expect_options(&mut self, open: usize) -> Result<(), ParseError> {
        match self.peek() {
            Some(',') => {
                self.bump();
                self.skip_whitespace();
                Ok(())
            }
            Some('}') => Err(self.error(ParseErrorKind::MissingOptions, open)),
            None => Err(self.error(ParseErrorKind::UnclosedArgument, open)),
            Some(_) => Err(self.error(ParseErrorKind::MalformedArgument, self.pos)),
        }
    }

    fn parse_plural(
        &mut self,
        name: String,
        plural_type: PluralType,
        open: usize,
    ) -> Result<Node, ParseError> {
        self.expect_options(open)?;

        let mut offset = 0.0;
        if self.rest().starts_with("offset:") {
            self.pos += "offset:".len();
            self.skip_whitespace();
            let offset_start = self.pos;
            let digits = self.take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
            offset = digits
                .parse::<f64>()
                .map_err(|_| self.error(ParseErrorKind::InvalidOffset, offset_start))?;
        }

        let mut options: Vec<PluralOption> = Vec::new();
        for (raw, at, body) in self.parse_options(open, Context::Plural)? {
            let selector = match raw.strip_prefix('=') {
                Some(number) => PluralSelector::Exact(
                    number
                        .parse::<f64>()
                        .map_err(|_| self.error(ParseErrorKind::InvalidSelector, at))?,
                ),
                None => PluralSelector::Keyword(raw.clone()),
            };
            if options.iter().any(|o| o.selector == selector) {
                return Err(self.error(ParseErrorKind::DuplicateSelector(raw), at));
            }
            options.push(PluralOption { selector, body });
        }

        Ok(Node::Plural {
            name,
            offset,
            plural_type,
            options,
        })
    }

    fn parse_select(&mut self, name: String, open: usize) -> Result<Node, ParseError> {
        self.expect_options(open)?;

        let mut options: Vec<SelectOption> = Vec::new();
        for (key, at, body) in self.parse_options(open, Context::Select)? {
            if options.iter().any(|o| o.key == key) {
                return Err(self.error(ParseErrorKind::DuplicateSelector(key), at));
            }
            options.push(SelectOption { key, body });
        }

        Ok(Node::Select { name, options })
    }

    /// Parse `selector {body}` pairs up to and including the closing `}` of
    /// the argument.
    fn parse_options(
        &mut self,
        open: usize,
        context: Context,
    ) -> Result<Vec<(String, usize, Message)>, ParseError> {
        let mut options = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnclosedArgument, open)),
                Some('}') => {
                    self.bump();
                    break;
                }
                _ => {}
            }

            let at = self.pos;
            let selector = self
                .take_while(|c| !c.is_whitespace() && c != '{' && c != '}')
                .to_string();
            if selector.is_empty() {
                return Err(self.error(ParseErrorKind::InvalidSelector, at));
            }

            self.skip_whitespace();
            if self.peek() != Some('{') {
                return Err(self.error(ParseErrorKind::MissingOptionBody(selector), self.pos));
            }
            self.bump();

            let body = self.parse_message(true, context)?;
            if self.peek() != Some('}') {
                return Err(self.error(ParseErrorKind::UnclosedOptionBody, at));
            }
            self.bump();

            options.push((selector, at, body));
        }

        if options.is_empty() {
            return Err(self.error(ParseErrorKind::MissingOptions, open));
        }
        Ok(options)
    }
}

fn flush(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Literal(std::mem::take(text)));
    }
}
