//! Known editor conversions: Quill delta JSON in, paragraph document JSON out.

use quill_babel::parse_quill_delta;
use serde_json::{json, Value};

fn assert_converts(input: Value, expected: Value) {
    let parsed = parse_quill_delta(&input.to_string()).expect("delta should convert");
    let actual = serde_json::to_value(&parsed).expect("model should serialize");
    assert_eq!(actual, expected);
}

#[test]
fn test_basic() {
    assert_converts(
        json!({"ops": [{"insert": "Hello there!"}]}),
        json!({
            "paragraphs": [{"textRuns": [{"text": "Hello there!"}]}],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_header() {
    assert_converts(
        json!({"ops": [
            {"insert": "A Level One Heading"},
            {"insert": "\n", "attributes": {"header": 1}},
            {"insert": "Level Two Heading Here"},
            {"insert": "\n", "attributes": {"header": 2}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "A Level One Heading"}], "attributes": {"header": 1}},
                {"textRuns": [{"text": "Level Two Heading Here"}], "attributes": {"header": 2}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_multi_paragraph() {
    assert_converts(
        json!({"ops": [{
            "insert": "This is a test of the basic paragraph parsing.\nHere is the second paragraph in the editor.\nThis is the third paragraph in the list.\n"
        }]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "This is a test of the basic paragraph parsing."}]},
                {"textRuns": [{"text": "Here is the second paragraph in the editor."}]},
                {"textRuns": [{"text": "This is the third paragraph in the list."}]},
                {"textRuns": [{"text": ""}]}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_formatted_runs() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is some basic text that is "},
            {"insert": "bolded", "attributes": {"bold": true}},
            {"insert": " and then back to normal.\nWe will then continue typing some text that is "},
            {"insert": "italicized", "attributes": {"italic": true}},
            {"insert": " but then back to normal. We can also try to "},
            {"insert": "strikethrough the text", "attributes": {"strike": true}},
            {"insert": " and back to normal too.\nAnd then we can try to "},
            {"insert": "underline the text.", "attributes": {"underline": true}},
            {"insert": "\n"}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [
                    {"text": "Here is some basic text that is "},
                    {"text": "bolded", "attributes": {"bold": true}},
                    {"text": " and then back to normal."}
                ]},
                {"textRuns": [
                    {"text": "We will then continue typing some text that is "},
                    {"text": "italicized", "attributes": {"italic": true}},
                    {"text": " but then back to normal. We can also try to "},
                    {"text": "strikethrough the text", "attributes": {"strike": true}},
                    {"text": " and back to normal too."}
                ]},
                {"textRuns": [
                    {"text": "And then we can try to "},
                    {"text": "underline the text.", "attributes": {"underline": true}}
                ]},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_other_run_format() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is a test of the "},
            {"insert": "subscript", "attributes": {"script": "sub"}},
            {"insert": " and end the sentence.\nThen try a "},
            {"insert": "superscript", "attributes": {"script": "super"}},
            {"insert": " here.\nNow a "},
            {"insert": "color for the text", "attributes": {"color": "#ee0000"}},
            {"insert": " and some "},
            {"insert": "background color", "attributes": {"background": "#00ff00"}},
            {"insert": ".\nA font like "},
            {"insert": "sans-serif", "attributes": {"font": "sans-serif"}},
            {"insert": " and then return to normal.\n"}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [
                    {"text": "Here is a test of the "},
                    {"text": "subscript", "attributes": {"script": "sub"}},
                    {"text": " and end the sentence."}
                ]},
                {"textRuns": [
                    {"text": "Then try a "},
                    {"text": "superscript", "attributes": {"script": "super"}},
                    {"text": " here."}
                ]},
                {"textRuns": [
                    {"text": "Now a "},
                    {"text": "color for the text", "attributes": {"color": "#ee0000"}},
                    {"text": " and some "},
                    {"text": "background color", "attributes": {"background": "#00ff00"}},
                    {"text": "."}
                ]},
                {"textRuns": [
                    {"text": "A font like "},
                    {"text": "sans-serif", "attributes": {"font": "sans-serif"}},
                    {"text": " and then return to normal."}
                ]},
                {"textRuns": [{"text": ""}]}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_bullet_list() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is just a basic line of text.\nThis is the first bullet point."},
            {"insert": "\n", "attributes": {"list": "bullet"}},
            {"insert": "This is the second bullet point in the list."},
            {"insert": "\n", "attributes": {"list": "bullet"}},
            {"insert": "Here is a subpoint in the list."},
            {"insert": "\n", "attributes": {"list": "bullet", "indent": 1}},
            {"insert": "Back to the main level."},
            {"insert": "\n", "attributes": {"list": "bullet"}},
            {"insert": "Here is just some regular text."}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "Here is just a basic line of text."}]},
                {"textRuns": [{"text": "This is the first bullet point."}], "attributes": {"list": "bullet"}},
                {"textRuns": [{"text": "This is the second bullet point in the list."}], "attributes": {"list": "bullet"}},
                {"textRuns": [{"text": "Here is a subpoint in the list."}], "attributes": {"list": "bullet", "indent": 1}},
                {"textRuns": [{"text": "Back to the main level."}], "attributes": {"list": "bullet"}},
                {"textRuns": [{"text": "Here is just some regular text."}]}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_list_run_formatting() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is just a normal line of text.\nThen this is the first point which also has some "},
            {"insert": "formatted text in bold", "attributes": {"bold": true}},
            {"insert": " but then returns to normal text."},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "This is the second point in the list that will "},
            {"insert": "end with underlined text.", "attributes": {"underline": true}},
            {"insert": "\n", "attributes": {"list": "ordered"}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "Here is just a normal line of text."}]},
                {"textRuns": [
                    {"text": "Then this is the first point which also has some "},
                    {"text": "formatted text in bold", "attributes": {"bold": true}},
                    {"text": " but then returns to normal text."}
                ], "attributes": {"list": "ordered"}},
                {"textRuns": [
                    {"text": "This is the second point in the list that will "},
                    {"text": "end with underlined text.", "attributes": {"underline": true}}
                ], "attributes": {"list": "ordered"}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 1, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_ordered_list_tracking() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is the first point of the first list"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "And then the second point with some formatting "},
            {"insert": "underlined text", "attributes": {"underline": true}},
            {"insert": " but then back to normal"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "\nAnd then just some regular text in the editor\nBut then we start a new ordered list here"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "And a second point in second list"},
            {"insert": "\n", "attributes": {"list": "ordered", "indent": 1}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "Here is the first point of the first list"}], "attributes": {"list": "ordered"}},
                {"textRuns": [
                    {"text": "And then the second point with some formatting "},
                    {"text": "underlined text", "attributes": {"underline": true}},
                    {"text": " but then back to normal"}
                ], "attributes": {"list": "ordered"}},
                {"textRuns": [{"text": ""}]},
                {"textRuns": [{"text": "And then just some regular text in the editor"}]},
                {"textRuns": [{"text": "But then we start a new ordered list here"}], "attributes": {"list": "ordered"}},
                {"textRuns": [{"text": "And a second point in second list"}], "attributes": {"list": "ordered", "indent": 1}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 2, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_hyperlink_tracking() {
    assert_converts(
        json!({"ops": [
            {"insert": "I am just writing a string of text with a "},
            {"insert": "hyperlink to Google", "attributes": {"link": "https://google.com"}},
            {"insert": " and then back to normal.\nThen include another hyperlink to "},
            {"insert": "GitHub", "attributes": {"link": "https://github.com"}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [
                    {"text": "I am just writing a string of text with a "},
                    {"text": "hyperlink to Google", "attributes": {"link": "https://google.com"}},
                    {"text": " and then back to normal."}
                ]},
                {"textRuns": [
                    {"text": "Then include another hyperlink to "},
                    {"text": "GitHub", "attributes": {"link": "https://github.com"}}
                ]}
            ],
            "setup": {
                "numberedLists": 0,
                "hyperlinks": [
                    {"text": "hyperlink to Google", "link": "https://google.com"},
                    {"text": "GitHub", "link": "https://github.com"}
                ]
            }
        }),
    );
}

#[test]
fn test_embed() {
    assert_converts(
        json!({"ops": [
            {"insert": {"image": "base64string"}},
            {"insert": "Here is some miscellaneous text in the document.\n"},
            {"insert": {"video": "https://www.linktovideotowatch.com/video"}},
            {"insert": "Then I have some text talking about my video.\nBut then I will write my own formula here: "},
            {"insert": {"formula": "e=mc^2"}},
            {"insert": ".\n"}
        ]}),
        json!({
            "paragraphs": [
                {"embed": {"image": "base64string"}},
                {"textRuns": [{"text": "Here is some miscellaneous text in the document."}]},
                {"textRuns": [{"text": ""}]},
                {"embed": {"video": "https://www.linktovideotowatch.com/video"}},
                {"textRuns": [{"text": "Then I have some text talking about my video."}]},
                {"textRuns": [
                    {"text": "But then I will write my own formula here: "},
                    {"formula": "e=mc^2"},
                    {"text": "."}
                ]},
                {"textRuns": [{"text": ""}]}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_other_line_formatting() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is some basic text.\nThis is formatted as a code block."},
            {"insert": "\n", "attributes": {"code-block": true}},
            {"insert": "Then we go back to some normal text.\nNow this is a block quote."},
            {"insert": "\n", "attributes": {"blockquote": true}},
            {"insert": "And back to normal text paragraph.\nNext we will align center."},
            {"insert": "\n", "attributes": {"align": "center"}},
            {"insert": "This is a line aligned to the right."},
            {"insert": "\n", "attributes": {"align": "right"}},
            {"insert": "And this line will go from the right to the left."},
            {"insert": "\n", "attributes": {"direction": "rtl"}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "Here is some basic text."}]},
                {"textRuns": [{"text": "This is formatted as a code block."}], "attributes": {"code-block": true}},
                {"textRuns": [{"text": "Then we go back to some normal text."}]},
                {"textRuns": [{"text": "Now this is a block quote."}], "attributes": {"blockquote": true}},
                {"textRuns": [{"text": "And back to normal text paragraph."}]},
                {"textRuns": [{"text": "Next we will align center."}], "attributes": {"align": "center"}},
                {"textRuns": [{"text": "This is a line aligned to the right."}], "attributes": {"align": "right"}},
                {"textRuns": [{"text": "And this line will go from the right to the left."}], "attributes": {"direction": "rtl"}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_full_run_format() {
    assert_converts(
        json!({"ops": [
            {"insert": "Some basic text in the editor.\n"},
            {"insert": "This line is completely underlined.", "attributes": {"underline": true}},
            {"insert": "\nBut then we just start a new line.\n"}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "Some basic text in the editor."}]},
                {"textRuns": [
                    {"text": ""},
                    {"text": "This line is completely underlined.", "attributes": {"underline": true}},
                    {"text": ""}
                ]},
                {"textRuns": [{"text": "But then we just start a new line."}]},
                {"textRuns": [{"text": ""}]}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_mixed_run_formatting() {
    assert_converts(
        json!({"ops": [
            {"insert": "Here is some basic text with mixed run formatting. "},
            {"insert": "This text is bold and italicized.", "attributes": {"bold": true, "italic": true}},
            {"insert": " But then it continues on.\nThen we start a line in a bullet "},
            {"insert": "with mixed formatting as well", "attributes": {"underline": true, "bold": true}},
            {"insert": "\n", "attributes": {"list": "bullet"}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [
                    {"text": "Here is some basic text with mixed run formatting. "},
                    {"text": "This text is bold and italicized.", "attributes": {"bold": true, "italic": true}},
                    {"text": " But then it continues on."}
                ]},
                {"textRuns": [
                    {"text": "Then we start a line in a bullet "},
                    {"text": "with mixed formatting as well", "attributes": {"underline": true, "bold": true}}
                ], "attributes": {"list": "bullet"}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 0, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_embed_then_ordered_line_starts_new_group() {
    assert_converts(
        json!({"ops": [
            {"insert": "One"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": {"image": "pic.png"}},
            {"insert": "Two"},
            {"insert": "\n", "attributes": {"list": "ordered"}}
        ]}),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "One"}], "attributes": {"list": "ordered"}},
                {"textRuns": []},
                {"embed": {"image": "pic.png"}},
                {"textRuns": [{"text": "Two"}], "attributes": {"list": "ordered"}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 2, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_linked_text_spanning_a_newline() {
    assert_converts(
        json!([
            {"insert": "docs\nhere", "attributes": {"link": "https://docs.rs"}}
        ]),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "docs", "attributes": {"link": "https://docs.rs"}}]},
                {"textRuns": [{"text": "here", "attributes": {"link": "https://docs.rs"}}]}
            ],
            "setup": {
                "numberedLists": 0,
                "hyperlinks": [
                    {"text": "docs", "link": "https://docs.rs"},
                    {"text": "here", "link": "https://docs.rs"}
                ]
            }
        }),
    );
}

#[test]
fn test_line_keys_on_multiline_text_stay_on_runs() {
    assert_converts(
        json!([
            {"insert": "A"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "x\ny", "attributes": {"list": "ordered", "bold": true}},
            {"insert": "\n", "attributes": {"list": "ordered"}}
        ]),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "A"}], "attributes": {"list": "ordered"}},
                {"textRuns": [{"text": "x", "attributes": {"list": "ordered", "bold": true}}]},
                {
                    "textRuns": [{"text": "y", "attributes": {"list": "ordered", "bold": true}}],
                    "attributes": {"list": "ordered"}
                },
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 2, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_empty_line_attributes_are_kept_and_end_group() {
    assert_converts(
        json!([
            {"insert": "A"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "B"},
            {"insert": "\n", "attributes": {}},
            {"insert": "C"},
            {"insert": "\n", "attributes": {"list": "ordered"}}
        ]),
        json!({
            "paragraphs": [
                {"textRuns": [{"text": "A"}], "attributes": {"list": "ordered"}},
                {"textRuns": [{"text": "B"}], "attributes": {}},
                {"textRuns": [{"text": "C"}], "attributes": {"list": "ordered"}},
                {"textRuns": []}
            ],
            "setup": {"numberedLists": 2, "hyperlinks": []}
        }),
    );
}

#[test]
fn test_empty_line_attributes_serialize_as_present() {
    let input = json!([
        {"insert": "\n"},
        {"insert": "a"},
        {"insert": "\n", "attributes": {}}
    ]);
    let parsed = parse_quill_delta(&input.to_string()).expect("delta should convert");
    let output = parsed.to_json().expect("model should serialize");
    assert_eq!(
        output,
        r#"{"paragraphs":[{"textRuns":[]},{"textRuns":[{"text":"a"}],"attributes":{}},{"textRuns":[]}],"setup":{"numberedLists":0,"hyperlinks":[]}}"#
    );
}
