//! HTML to plain text conversion for the text/plain alternative

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?is)<style.*?>.*?</style>").unwrap();
    static ref HEAD_BLOCK: Regex = Regex::new(r"(?is)<head.*?>.*?</head>").unwrap();
    static ref IMAGE: Regex = Regex::new(r#"(?is)<img[^>]*?alt="(.*?)".*?/>"#).unwrap();
    static ref LINK: Regex = Regex::new(r#"(?is)<a.*?href="(.*?)".*?>(.*?)</a>"#).unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref CDATA: Regex = Regex::new(r"(?s)<!\[CDATA\[.*?\]\]>").unwrap();
    static ref DECLARATION: Regex = Regex::new(r"<![^>]*>").unwrap();
    static ref PROCESSING_INSTRUCTION: Regex = Regex::new(r"(?s)<\?.*?\?>").unwrap();
    static ref TAG: Regex = Regex::new(r"</?([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").unwrap();
    static ref NEWLINE_SPACE: Regex = Regex::new(r"\n\s").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Converts HTML content to plain text.
///
/// Images become their alt text, links become `text (url)`, paragraphs and
/// divs end with a line break and HTML entities are decoded.
pub fn convert_to_plain_text(html: &str) -> String {
    let content = html.replace("\r\n", "\n").replace('\r', "\n").replace('\t', "");

    let content = STYLE_BLOCK.replace_all(&content, "");
    let content = HEAD_BLOCK.replace_all(&content, "");

    let content = IMAGE.replace_all(&content, "${1}");
    let content = LINK.replace_all(&content, "${2} (${1})");

    let content = strip_tags(&content, &["p", "div"]);

    let content = NEWLINE_SPACE.replace_all(&content, "\n");
    let content = BLANK_LINES.replace_all(&content, "\n");

    let content = content
        .replace("<div>", "")
        .replace("</div>", "\n")
        .replace("<p>", "")
        .replace("</p>", "\n");

    let content = strip_tags(content.trim(), &[]);

    html_escape::decode_html_entities(&content).into_owned()
}

/// Removes comments, declarations, processing instructions and every tag
/// whose name is not in `allowed`
fn strip_tags(content: &str, allowed: &[&str]) -> String {
    let content = COMMENT.replace_all(content, "");
    let content = CDATA.replace_all(&content, "");
    let content = DECLARATION.replace_all(&content, "");
    let content = PROCESSING_INSTRUCTION.replace_all(&content, "");

    TAG.replace_all(&content, |caps: &Captures<'_>| {
        let name = caps[1].to_ascii_lowercase();

        if allowed.contains(&name.as_str()) {
            caps[0].to_string()
        } else {
            String::new()
        }
    })
    .into_owned()
}
