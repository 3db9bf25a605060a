use proptest::prelude::*;
use richtext::convert_cell;
use serde_json::Value;

const TAGS: &[&str] = &[
    "p", "div", "section", "h1", "h3", "ul", "ol", "li", "a", "b", "strong", "em", "i", "u",
    "s", "del", "span", "br", "hr", "script", "table", "td", "blockquote", "foo",
];

/// Random tag soup: open tags, close tags, attributes and words in any order.
fn tag_soup() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        prop::sample::select(TAGS).prop_map(|tag| format!("<{tag}>")),
        prop::sample::select(TAGS).prop_map(|tag| format!("</{tag}>")),
        prop::sample::select(TAGS).prop_map(|tag| format!("<{tag} href=\"/x\" title=\"t\">")),
        "[a-zA-Z0-9äöü]{1,8}",
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("&amp;".to_string()),
    ];
    prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.concat())
}

fn convert_value(raw: &str) -> Value {
    serde_json::from_str(&convert_cell(Some(raw)).unwrap()).unwrap()
}

fn walk<'a>(value: &'a Value, texts: &mut Vec<&'a serde_json::Map<String, Value>>) {
    if let Some(object) = value.as_object() {
        if object.get("type").and_then(Value::as_str) == Some("text") {
            texts.push(object);
        }
        if let Some(children) = object.get("children").and_then(Value::as_array) {
            for child in children {
                walk(child, texts);
            }
        }
    }
}

proptest! {
    #[test]
    fn conversion_is_deterministic(html in tag_soup()) {
        let first = convert_cell(Some(&html)).unwrap();
        let second = convert_cell(Some(&html)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_input_gives_empty_string(blank in "[ \t\n]{0,16}") {
        prop_assert_eq!(convert_cell(Some(&blank)).unwrap(), "");
    }

    #[test]
    fn plain_text_is_one_paragraph(text in "[a-zA-Z0-9 .,!?:;'\"()\r\n\t-]{1,64}") {
        prop_assume!(!text.trim().is_empty());
        let root = convert_value(&text);
        let expected = serde_json::json!({
            "type": "root",
            "children": [
                {"type": "paragraph", "children": [{"type": "text", "value": text.trim()}]}
            ]
        });
        prop_assert_eq!(root, expected);
    }

    #[test]
    fn text_flags_are_only_true(html in tag_soup()) {
        prop_assume!(!html.trim().is_empty());
        let root = convert_value(&html);
        let mut texts = Vec::new();
        walk(&root, &mut texts);

        for text in texts {
            prop_assert!(text.get("value").map(Value::is_string).unwrap_or(false));
            for (key, value) in text {
                match key.as_str() {
                    "type" | "value" => {}
                    "bold" | "italic" | "underline" | "strikethrough" => {
                        prop_assert_eq!(value, &Value::Bool(true));
                    }
                    other => prop_assert!(false, "unexpected key {}", other),
                }
            }
        }
    }

    #[test]
    fn non_blank_input_never_yields_childless_root(html in tag_soup()) {
        prop_assume!(!html.trim().is_empty());
        let root = convert_value(&html);
        prop_assert_eq!(root["type"].as_str(), Some("root"));
        prop_assert!(!root["children"].as_array().unwrap().is_empty());
    }
}
