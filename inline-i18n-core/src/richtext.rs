//! Rich text segments
//!
//! Splits `Read <link>the terms</link>` into text and component segments so
//! a UI layer can wrap the component parts.

use regex::Regex;

/// A piece of a rich text template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichTextSegment {
    Text(String),
    Component { name: String, content: String },
}

/// Split `template` on `<name>content</name>` for the given component names.
///
/// Tags close with the same name and match the shortest content. Unknown
/// or unclosed tags stay in the text.
///
/// ```
/// use inline_i18n_core::{parse_rich_text, RichTextSegment};
///
/// let segments = parse_rich_text("Read <link>terms</link> and <bold>agree</bold>", &["link", "bold"]);
/// assert_eq!(
///     segments,
///     vec![
///         RichTextSegment::Text("Read ".into()),
///         RichTextSegment::Component { name: "link".into(), content: "terms".into() },
///         RichTextSegment::Text(" and ".into()),
///         RichTextSegment::Component { name: "bold".into(), content: "agree".into() },
///     ]
/// );
/// ```
pub fn parse_rich_text<S: AsRef<str>>(template: &str, component_names: &[S]) -> Vec<RichTextSegment> {
    let alternatives: Vec<String> = component_names
        .iter()
        .map(|name| regex::escape(name.as_ref()))
        .collect();
    if alternatives.is_empty() {
        return vec![RichTextSegment::Text(template.to_string())];
    }
    let Ok(open_tag) = Regex::new(&format!("<({})>", alternatives.join("|"))) else {
        return vec![RichTextSegment::Text(template.to_string())];
    };

    let mut segments = Vec::new();
    let mut emitted = 0;
    let mut search = 0;

    while let Some(caps) = open_tag.captures_at(template, search) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let close = format!("</{}>", name.as_str());

        let Some(close_at) = template[tag.end()..].find(&close).map(|i| i + tag.end()) else {
            // unclosed: try the next opening tag after this one
            search = tag.start() + 1;
            continue;
        };

        if tag.start() > emitted {
            segments.push(RichTextSegment::Text(template[emitted..tag.start()].to_string()));
        }
        segments.push(RichTextSegment::Component {
            name: name.as_str().to_string(),
            content: template[tag.end()..close_at].to_string(),
        });

        emitted = close_at + close.len();
        search = emitted;
    }

    if emitted < template.len() {
        segments.push(RichTextSegment::Text(template[emitted..].to_string()));
    }
    segments
}
