//! Message - Text handed to the delivery layer

/// Outgoing chat payload
///
/// The engine does not render markup; it only tags which format the text
/// is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Legacy text with section-sign colour codes already applied
    Legacy(String),
    /// MiniMessage markup
    MiniMessage(String),
    /// Raw JSON text component
    Json(String),
}

impl Message {
    /// Legacy message with `&` colour codes translated
    pub fn legacy(text: &str) -> Message {
        Message::Legacy(color(text))
    }

    pub fn text(&self) -> &str {
        match self {
            Message::Legacy(text) | Message::MiniMessage(text) | Message::Json(text) => text,
        }
    }
}

pub const SECTION_SIGN: char = '\u{00A7}';

const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Translate `&x` colour and format codes to `§x`
///
/// `&` not followed by a valid code character is left alone.
pub fn color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '&' && COLOR_CODES.contains(next) => {
                out.push(SECTION_SIGN);
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}
