use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A named widget as exchanged with clients.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub name: String,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Widget { name: name.into() }
    }

    pub fn to_json(&self) -> Value {
        json!({ "name": self.name })
    }

    /// Render the widget as an HTML fragment.
    ///
    /// The full form is used when listing the collection, the compact form
    /// when echoing a freshly created widget.
    pub fn to_html(&self, full: bool) -> String {
        let name = escape_html(&self.name);
        if full {
            format!(
                "<div class=\"widget\"><h3>Widget</h3><p>Name: {}</p></div>",
                name
            )
        } else {
            format!("<span class=\"widget\">{}</span>", name)
        }
    }
}

/// Diagnostic returned in place of a representation that could not be built.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorMessage {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "message": self.message })
    }
}

impl Default for ErrorMessage {
    fn default() -> Self {
        ErrorMessage::new("The widget collection is not available.")
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_test::{assert_tokens, Token};

    #[test]
    fn serde_widget() {
        let widget = Widget::new("sprocket");

        assert_tokens(
            &widget,
            &[
                Token::Struct {
                    name: "Widget",
                    len: 1,
                },
                Token::Str("name"),
                Token::Str("sprocket"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn serde_error_message() {
        let em = ErrorMessage::new("gone");

        assert_tokens(
            &em,
            &[
                Token::Struct {
                    name: "ErrorMessage",
                    len: 1,
                },
                Token::Str("message"),
                Token::Str("gone"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn json_name_round_trips() {
        for name in ["Foo", "", "with \"quotes\" and ünïcode"] {
            let json = Widget::new(name).to_json().to_string();
            let parsed: Widget = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.name, name);
        }
    }

    #[test]
    fn html_embeds_name_in_both_modes() {
        let widget = Widget::new("Foo");
        assert!(widget.to_html(true).contains("Foo"));
        assert!(widget.to_html(false).contains("Foo"));
        assert_ne!(widget.to_html(true), widget.to_html(false));
    }

    #[test]
    fn html_is_deterministic() {
        let widget = Widget::new("Foo");
        assert_eq!(widget.to_html(true), widget.to_html(true));
        assert_eq!(widget.to_html(false), widget.to_html(false));
    }

    #[test]
    fn html_escapes_markup_in_names() {
        let widget = Widget::new("<b>bold</b> & co");
        assert_eq!(
            widget.to_html(false),
            "<span class=\"widget\">&lt;b&gt;bold&lt;/b&gt; &amp; co</span>"
        );
    }

    #[test]
    fn error_message_formats() {
        let em = ErrorMessage::new("store offline");
        assert_eq!(em.to_string(), "store offline");
        assert_eq!(em.to_json(), json!({ "message": "store offline" }));
    }
}
