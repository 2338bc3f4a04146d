// src/formatting/blocks.rs
//! Plain-text extraction from block objects.

use crate::formatting::rich_text::to_plain_text;
use crate::model::BlockObject;

/// The plain text of a full block's rich text content.
///
/// Partial blocks and kinds that carry no rich text (images, embeds,
/// dividers, anything unrecognized) extract as `""`.
pub fn get_block_plain_text(block: &BlockObject) -> String {
    block
        .as_full()
        .and_then(|full| full.payload.rich_text())
        .map(to_plain_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn block(body: serde_json::Value) -> BlockObject {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn text_bearing_kinds_extract_their_rich_text() {
        let kinds = [
            "paragraph",
            "heading_1",
            "heading_2",
            "heading_3",
            "bulleted_list_item",
            "numbered_list_item",
            "toggle",
            "quote",
        ];
        for kind in kinds {
            let body = format!(
                r#"{{
                    "object": "block",
                    "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
                    "type": "{kind}",
                    "{kind}": {{
                        "rich_text": [
                            {{ "type": "text", "text": {{ "content": "some " }}, "plain_text": "some " }},
                            {{ "type": "text", "text": {{ "content": "words" }}, "plain_text": "words" }}
                        ]
                    }}
                }}"#
            );
            let value: BlockObject = serde_json::from_str(&body).unwrap();
            assert_eq!(get_block_plain_text(&value), "some words", "kind {}", kind);
        }
    }

    #[test]
    fn to_do_callout_and_code_extract_too() {
        let value = block(json!({
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "type": "to_do",
            "to_do": {
                "rich_text": [{ "type": "text", "text": { "content": "task" }, "plain_text": "task" }],
                "checked": false
            }
        }));
        assert_eq!(get_block_plain_text(&value), "task");

        let value = block(json!({
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "type": "code",
            "code": {
                "rich_text": [{ "type": "text", "text": { "content": "let x = 1;" }, "plain_text": "let x = 1;" }],
                "language": "rust"
            }
        }));
        assert_eq!(get_block_plain_text(&value), "let x = 1;");
    }

    #[test]
    fn non_text_kinds_extract_empty() {
        let value = block(json!({
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "type": "image",
            "image": { "type": "external", "external": { "url": "https://example.com/x.png" } }
        }));
        assert_eq!(get_block_plain_text(&value), "");
    }

    #[test]
    fn partial_block_extracts_empty() {
        let value = block(json!({
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7"
        }));
        assert_eq!(get_block_plain_text(&value), "");
    }
}
