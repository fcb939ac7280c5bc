//! Tool invocation results

use serde::{Deserialize, Serialize};

/// A single content item returned from a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Plain text
    Text {
        /// The text body
        text: String,
    },
}

/// Result of a successful tool call
///
/// Serializes as `{"content": [{"type": "text", "text": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Content items, in display order
    pub content: Vec<ToolContent>,
}

impl ToolOutput {
    /// Wrap `text` as the single content item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    /// Concatenate every text item, newline separated
    pub fn as_text(&self) -> String {
        self.content
            .iter()
            .map(|item| match item {
                ToolContent::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_output_wire_shape() {
        let output = ToolOutput::text("hello");
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value,
            json!({ "content": [{ "type": "text", "text": "hello" }] })
        );
    }

    #[test]
    fn test_as_text_joins_items() {
        let output = ToolOutput {
            content: vec![
                ToolContent::Text { text: "a".to_string() },
                ToolContent::Text { text: "b".to_string() },
            ],
        };
        assert_eq!(output.as_text(), "a\nb");
    }
}
