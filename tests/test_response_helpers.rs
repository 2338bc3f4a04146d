// tests/test_response_helpers.rs
//! Helper behavior over realistic response fixtures: URL extraction,
//! markdown rendering, and property extraction working together.

use notion_toolkit::{
    extract_block_id, extract_id, get_block_plain_text, get_page_properties_as_object,
    get_page_title, get_property, is_full_comment, is_full_page_or_data_source, is_full_user,
    to_markdown, BlockObject, CommentObject, ExtractedValue, PageObject, PageOrDataSource,
    UserObject,
};
use pretty_assertions::assert_eq;

const PAGE_FIXTURE: &str = r#"{
    "object": "page",
    "id": "be633bf1-dfa0-436d-b259-571129a590e5",
    "url": "https://www.notion.so/Launch-be633bf1dfa0436db259571129a590e5",
    "created_time": "2022-10-24T22:54:00.000Z",
    "properties": {
        "Name": {
            "id": "title",
            "type": "title",
            "title": [
                { "type": "text", "text": { "content": "Q3 " }, "plain_text": "Q3 ",
                  "annotations": { "bold": true } },
                { "type": "text", "text": { "content": "Launch" }, "plain_text": "Launch" }
            ]
        },
        "Status": { "id": "s1", "type": "status", "status": { "name": "Shipping" } },
        "Tags": {
            "id": "t1",
            "type": "multi_select",
            "multi_select": [{ "name": "priority" }, { "name": "q3" }]
        },
        "Effort": { "id": "e1", "type": "number", "number": 13.0 }
    }
}"#;

#[test]
fn page_fixture_extracts_everything() {
    let page: PageObject = serde_json::from_str(PAGE_FIXTURE).unwrap();
    assert_eq!(get_page_title(&page), "Q3 Launch");
    assert_eq!(
        get_property(&page, "Status"),
        Some(ExtractedValue::Text("Shipping".to_string()))
    );
    assert_eq!(
        get_property(&page, "Tags"),
        Some(ExtractedValue::Names(vec![
            "priority".to_string(),
            "q3".to_string()
        ]))
    );

    let all = get_page_properties_as_object(&page);
    assert_eq!(all.len(), 4);
    assert_eq!(all["Effort"], Some(ExtractedValue::Number(13.0)));
}

#[test]
fn page_url_round_trips_through_id_extraction() {
    let page: PageObject = serde_json::from_str(PAGE_FIXTURE).unwrap();
    let full = match &page {
        PageObject::Full(full) => full,
        other => panic!("fixture should be full, got {:?}", other),
    };
    let from_url = extract_id(&full.url).unwrap();
    let from_id = extract_id(&full.id).unwrap();
    assert_eq!(from_url, from_id);
    assert_eq!(from_url.as_str(), "be633bf1-dfa0-436d-b259-571129a590e5");
}

#[test]
fn block_anchor_and_text_extraction() {
    let url = "https://www.notion.so/Launch-be633bf1dfa0436db259571129a590e5\
               #c02fc1d3db8b45c5a22227595b15aea7";
    assert_eq!(
        extract_block_id(url).unwrap().as_str(),
        "c02fc1d3-db8b-45c5-a222-27595b15aea7"
    );

    let block: BlockObject = serde_json::from_str(
        r#"{
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "type": "quote",
            "quote": {
                "rich_text": [
                    { "type": "text", "text": { "content": "Ship early" }, "plain_text": "Ship early" }
                ]
            }
        }"#,
    )
    .unwrap();
    assert_eq!(get_block_plain_text(&block), "Ship early");
}

#[test]
fn markdown_rendering_of_mixed_spans() {
    let page: PageObject = serde_json::from_str(PAGE_FIXTURE).unwrap();
    let full = page.as_full().unwrap();
    let title = match &full.properties["Name"].payload {
        notion_toolkit::PropertyPayload::Title { title } => title,
        other => panic!("expected title payload, got {:?}", other),
    };
    assert_eq!(to_markdown(title), "**Q3 **Launch");
}

#[test]
fn mixed_search_results_discriminate_per_kind() {
    let results: Vec<PageOrDataSource> = serde_json::from_str(
        r#"[
            { "object": "data_source", "id": "920e762d-e551-4213-b2d8-1dbea14c9e30" },
            { "object": "page", "id": "be633bf1-dfa0-436d-b259-571129a590e5",
              "url": "https://www.notion.so/x", "properties": {} },
            { "object": "page", "id": "b55c9c91-384d-452b-81db-d1ef79372b75" }
        ]"#,
    )
    .unwrap();
    let fullness: Vec<bool> = results.iter().map(is_full_page_or_data_source).collect();
    assert_eq!(fullness, vec![true, true, false]);
}

#[test]
fn user_and_comment_predicates_on_fixtures() {
    let user: UserObject = serde_json::from_str(
        r#"{ "object": "user", "id": "e450a39e-9051-4d36-bc4e-8581611fc592",
             "name": "Aman Gupta", "type": "person", "person": {} }"#,
    )
    .unwrap();
    assert!(is_full_user(&user));

    let comment: CommentObject = serde_json::from_str(
        r#"{
            "object": "comment",
            "id": "7a793800-3e55-4d5e-8009-2261de026179",
            "discussion_id": "f1407351-36f5-4c49-a13c-49f8ba11776d",
            "created_by": { "object": "user", "id": "e450a39e-9051-4d36-bc4e-8581611fc592" },
            "rich_text": [
                { "type": "text", "text": { "content": "LGTM" }, "plain_text": "LGTM" }
            ]
        }"#,
    )
    .unwrap();
    assert!(is_full_comment(&comment));
    assert_eq!(notion_toolkit::to_plain_text(&comment.rich_text), "LGTM");
}
