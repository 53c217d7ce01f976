use super::{
    classify::LineClass,
    types::{Block, ListKind},
};

/// A list block that is still receiving items.
#[derive(Debug)]
struct ListBuilder {
    kind: ListKind,
    items: Vec<String>,
}

/// Phase 2 of parsing: assembles classified lines into blocks.
///
/// Holds the paragraph buffer and the open-list accumulator. Both are
/// materialized into the output only when closed: by a heading, a blank
/// line, a class switch, or end of input. Headings are never buffered.
pub struct BlockBuilder {
    paragraph: Vec<String>,
    open_list: Option<ListBuilder>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            paragraph: vec![],
            open_list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Heading { level, text } => {
                self.flush_paragraph();
                self.close_list();
                self.out.push(Block::Heading { level, text });
            }
            LineClass::ListItem { kind, text } => {
                // Content before a list never merges into the list's text.
                self.flush_paragraph();
                self.extend_list(kind, text);
            }
            LineClass::Blank => {
                self.flush_paragraph();
                self.close_list();
            }
            LineClass::Text(line) => {
                // Plain text always breaks an in-progress list.
                self.close_list();
                self.paragraph.push(line);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: trailing content is never dropped.
        self.flush_paragraph();
        self.close_list();
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, text: String) {
        match &mut self.open_list {
            Some(open) if open.kind == kind => open.items.push(text),
            _ => {
                // Lists of different marker kinds are never merged, even
                // when adjacent.
                self.close_list();
                self.open_list = Some(ListBuilder {
                    kind,
                    items: vec![text],
                });
            }
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        self.out.push(Block::Paragraph { text });
    }

    fn close_list(&mut self) {
        if let Some(open) = self.open_list.take() {
            self.out.push(Block::list(open.kind, open.items));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
