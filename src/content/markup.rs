//! The small markdown subset used by case study text fields.
//!
//! Paragraphs are separated by blank lines, list items start with `- `,
//! and list items may carry `**bold**` spans. Nothing else is recognized.

const LIST_PREFIX: &str = "- ";
const BOLD_DELIMITER: &str = "**";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) => text,
        }
    }
}

pub type ListItem = Vec<Span>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Consecutive text lines, displayed with line breaks between them.
    Paragraph(Vec<String>),
    List(Vec<ListItem>),
}

// Only one accumulator can hold content at a time, so pending content is
// a single tagged value rather than two buffers.
enum Pending {
    Idle,
    Paragraph(Vec<String>),
    List(Vec<ListItem>),
}

impl Pending {
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        match std::mem::replace(self, Pending::Idle) {
            Pending::Idle => {}
            Pending::Paragraph(lines) => blocks.push(Block::Paragraph(lines)),
            Pending::List(items) => blocks.push(Block::List(items)),
        }
    }

    fn push_line(&mut self, line: &str, blocks: &mut Vec<Block>) {
        if let Pending::Paragraph(lines) = self {
            lines.push(line.to_owned());
            return;
        }

        self.flush(blocks);
        *self = Pending::Paragraph(vec![line.to_owned()]);
    }

    fn push_item(&mut self, item: ListItem, blocks: &mut Vec<Block>) {
        if let Pending::List(items) = self {
            items.push(item);
            return;
        }

        self.flush(blocks);
        *self = Pending::List(vec![item]);
    }
}

/// Converts a free-text field into display blocks in input order.
///
/// Never fails; text that doesn't follow the subset simply becomes
/// paragraph content.
pub fn parse(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = Pending::Idle;

    for line in content.split('\n') {
        let trimmed = line.trim();

        if let Some(item) = trimmed.strip_prefix(LIST_PREFIX) {
            pending.push_item(split_bold(item), &mut blocks);
        } else if trimmed.is_empty() {
            pending.flush(&mut blocks);
        } else {
            pending.push_line(trimmed, &mut blocks);
        }
    }

    pending.flush(&mut blocks);
    blocks
}

/// Splits list item text on `**...**` pairs.
///
/// Segments alternate plain/bold starting with plain, and empty segments
/// are kept, so `**a**` yields `["", a, ""]`. Each opening delimiter pairs
/// with the next delimiter after it; an unpaired one stays in the text.
pub fn split_bold(text: &str) -> ListItem {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_DELIMITER) {
        let inner = &rest[open + BOLD_DELIMITER.len()..];
        let Some(close) = inner.find(BOLD_DELIMITER) else {
            break;
        };

        spans.push(Span::Plain(rest[..open].to_owned()));
        spans.push(Span::Bold(inner[..close].to_owned()));
        rest = &inner[close + BOLD_DELIMITER.len()..];
    }

    spans.push(Span::Plain(rest.to_owned()));
    spans
}
