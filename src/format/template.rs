use std::collections::HashMap;

use ratatui::{style::Style, text::Span};

use super::text::{display_width, ellipsize};

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied to the output as-is (`$$` already collapsed to `$`).
    Literal(String),
    /// A `$name` reference; holds the name without the leading `$`.
    Placeholder(String),
}

/// Values bound to placeholder names for one render.
pub type Values<'a> = HashMap<&'a str, &'a str>;

/// A compiled `$placeholder` template.
///
/// Compiling splits the format string into alternating literal and placeholder
/// tokens. A placeholder starts at `$` and runs until the next whitespace or the
/// end of the string; `$$` is an escaped literal `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    tokens: Vec<Token>,
}

/// Output of [`FormatTemplate::render`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// Display cells consumed by `spans`.
    pub width: usize,
    pub spans: Vec<Span<'static>>,
}

impl Rendered {
    /// Concatenated text of all spans, ignoring styles.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_ref()).collect()
    }
}

impl FormatTemplate {
    pub fn compile(format: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'$') {
                chars.next();
                literal.push('$');
                continue;
            }

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            let mut name = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    break;
                }
                name.push(next);
                chars.next();
            }
            tokens.push(Token::Placeholder(name));
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render against `values`, never exceeding `width` display cells.
    ///
    /// Placeholder spans carry `highlight`; literal spans carry the default
    /// style. A placeholder with no value (or an empty one) is written out as
    /// its raw `$name` text. The first token that does not fit is ellipsized
    /// and rendering stops there.
    pub fn render(&self, values: &Values<'_>, width: usize, highlight: Style) -> Rendered {
        let mut remaining = width;
        let mut rendered = Rendered::default();

        for token in &self.tokens {
            if remaining == 0 {
                break;
            }

            let (text, style) = match token {
                Token::Literal(text) => (text.clone(), Style::default()),
                Token::Placeholder(name) => {
                    let value = values
                        .get(name.as_str())
                        .copied()
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("${name}"));
                    (value, highlight)
                }
            };

            let len = display_width(&text);
            let (text, len) = if len > remaining {
                let cut = ellipsize(&text, remaining);
                let cut_len = display_width(&cut);
                // The cut token owns whatever budget was left.
                remaining = 0;
                (cut, cut_len)
            } else {
                remaining -= len;
                (text, len)
            };

            rendered.width += len;
            rendered.spans.push(Span::styled(text, style));
        }

        rendered
    }
}
