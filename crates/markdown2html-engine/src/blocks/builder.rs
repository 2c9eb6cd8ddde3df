use crate::translate::{LineTag, Translated, kinds::ListKind};

/// The list block currently open in the output, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenBlock {
    #[default]
    None,
    List(ListKind),
}

/// Line-by-line state machine producing bracketed HTML lines.
///
/// Instantiate one per conversion; `finish` closes whatever is still open.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    open: OpenBlock,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub const PARAGRAPH: &'static str = "<p>";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_block(&self) -> OpenBlock {
        self.open
    }

    pub fn push(&mut self, line: Translated) {
        match line.tag {
            LineTag::UnorderedItem => self.push_item(ListKind::Unordered, line.fragment),
            LineTag::OrderedItem => self.push_item(ListKind::Ordered, line.fragment),
            LineTag::Blank => {
                self.close_list();
                self.out.push(Self::PARAGRAPH.to_string());
            }
            LineTag::Plain => {
                self.close_list();
                self.out.push(line.fragment);
            }
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.close_list();
        self.out
    }

    fn push_item(&mut self, kind: ListKind, fragment: String) {
        if self.open != OpenBlock::List(kind) {
            self.close_list();
            log::debug!("opening <{}>", kind.tag_name());
            self.out.push(kind.open_tag());
            self.open = OpenBlock::List(kind);
        }
        self.out.push(fragment);
    }

    fn close_list(&mut self) {
        if let OpenBlock::List(kind) = std::mem::take(&mut self.open) {
            log::debug!("closing <{}>", kind.tag_name());
            self.out.push(kind.close_tag());
        }
    }
}
