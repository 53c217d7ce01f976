use crate::parsing::types::Block;

/// Renders blocks as an HTML fragment, one element or list item per line.
///
/// All text content is escaped; block structure is the only markup this
/// subset produces.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let depth = level.depth();
                out.push_str(&format!("<h{depth}>{}</h{depth}>\n", escape(text)));
            }
            Block::UnorderedList { items } => push_list(&mut out, "ul", items),
            Block::OrderedList { items } => push_list(&mut out, "ol", items),
            Block::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>\n", escape(text)));
            }
        }
    }

    out
}

fn push_list(out: &mut String, tag: &str, items: &[String]) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str(&format!("  <li>{}</li>\n", escape(item)));
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
