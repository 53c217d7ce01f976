use super::types::{HeadingLevel, ListKind};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently
/// without reference to surrounding context. Context-dependent decisions
/// (paragraph buffering, list grouping) belong to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `# `, `## ` or `### ` prefix; text is the remainder.
    Heading { level: HeadingLevel, text: String },
    /// `- `, `* ` or `<digits>. ` prefix; text is the remainder.
    ListItem { kind: ListKind, text: String },
    /// The empty string.
    Blank,
    /// Anything else, kept verbatim.
    Text(String),
}

/// Classifies individual lines for the block assembly phase.
///
/// Total over its input: every line maps to exactly one class, so parsing
/// never fails on arbitrary authored content. Unrecognized syntax is
/// plain text, not an error.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line. First match wins, headings checked longest
    /// prefix first so `### ` is never read as a level-1 marker with
    /// leftover hashes.
    pub fn classify(&self, line: &str) -> LineClass {
        if let Some(text) = line.strip_prefix("### ") {
            return LineClass::Heading {
                level: HeadingLevel::H3,
                text: text.to_string(),
            };
        }
        if let Some(text) = line.strip_prefix("## ") {
            return LineClass::Heading {
                level: HeadingLevel::H2,
                text: text.to_string(),
            };
        }
        if let Some(text) = line.strip_prefix("# ") {
            return LineClass::Heading {
                level: HeadingLevel::H1,
                text: text.to_string(),
            };
        }

        if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            return LineClass::ListItem {
                kind: ListKind::Unordered,
                text: text.to_string(),
            };
        }
        if let Some(text) = ordered_marker(line) {
            return LineClass::ListItem {
                kind: ListKind::Ordered,
                text: text.to_string(),
            };
        }

        if line.is_empty() {
            return LineClass::Blank;
        }

        LineClass::Text(line.to_string())
    }
}

/// `<digits>. ` marker: one or more ASCII digits, then a dot and a space.
/// Returns the item text with the marker stripped.
fn ordered_marker(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
