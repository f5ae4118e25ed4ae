//! A minimal block document: paragraphs holding text and inline math, and
//! display-math blocks.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::nodes::SegmentKind;
use crate::parser::{Options, Parser};
use crate::scanners::DELIMITER;

/// The formula a math block starts with when none is given.
pub const DEFAULT_BLOCK_LATEX: &str = "E = mc^2";

/// Identifies a block within its [`Document`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// No block with this id exists.
    #[error("no block {0} in document")]
    UnknownBlock(BlockId),

    /// The operation needs a paragraph, but the block holds math.
    #[error("block {0} is not a paragraph")]
    NotAParagraph(BlockId),
}

/// A display-math block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMath {
    /// The LaTeX source, without delimiters.
    pub latex: String,
}

impl Default for NodeMath {
    fn default() -> Self {
        NodeMath {
            latex: DEFAULT_BLOCK_LATEX.to_string(),
        }
    }
}

/// An inline math node within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineMath {
    /// The LaTeX source, without delimiters.
    pub latex: String,
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A run of literal text.
    Text(String),

    /// An inline math node.
    Math(InlineMath),
}

impl Inline {
    /// Shorthand for an inline math node.
    pub fn math(latex: impl Into<String>) -> Inline {
        Inline::Math(InlineMath {
            latex: latex.into(),
        })
    }
}

/// What a block holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// A paragraph of text and inline math.
    Paragraph(Vec<Inline>),

    /// A display-math block.
    Math(NodeMath),
}

impl BlockContent {
    /// A paragraph holding a single text run; empty text gives an empty
    /// paragraph.
    pub fn paragraph(text: impl Into<String>) -> BlockContent {
        let text = text.into();
        if text.is_empty() {
            BlockContent::Paragraph(vec![])
        } else {
            BlockContent::Paragraph(vec![Inline::Text(text)])
        }
    }

    /// A math block with the given formula.
    pub fn math(latex: impl Into<String>) -> BlockContent {
        BlockContent::Math(NodeMath {
            latex: latex.into(),
        })
    }
}

/// A block and its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block's id.
    pub id: BlockId,
    /// The block's content.
    pub content: BlockContent,
}

impl Block {
    /// Whether this is a display-math block.
    pub fn is_math(&self) -> bool {
        matches!(self.content, BlockContent::Math(_))
    }

    /// The text of the block.
    ///
    /// Inline math is written back in `$$latex$$` form; a math block yields
    /// its formula.
    pub fn text_content(&self) -> String {
        match &self.content {
            BlockContent::Math(math) => math.latex.clone(),
            BlockContent::Paragraph(inlines) => {
                let mut out = String::new();
                for inline in inlines {
                    match inline {
                        Inline::Text(text) => out.push_str(text),
                        Inline::Math(math) => {
                            out.push_str(DELIMITER);
                            out.push_str(&math.latex);
                            out.push_str(DELIMITER);
                        }
                    }
                }
                out
            }
        }
    }
}

/// An ordered list of blocks.
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
    next_id: u64,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document::default()
    }

    /// A document holding the given blocks in order.
    pub fn from_blocks<I: IntoIterator<Item = BlockContent>>(contents: I) -> Self {
        let mut doc = Document::new();
        for content in contents {
            doc.push(content);
        }
        doc
    }

    /// The blocks, in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up a block.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BlockId) -> Result<usize, DocumentError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(DocumentError::UnknownBlock(id))
    }

    fn allocate(&mut self, content: BlockContent) -> Block {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        Block {
            id,
            content: normalize(content),
        }
    }

    /// Append a block.
    ///
    /// Paragraph content is stored with adjacent text runs merged and empty
    /// ones dropped, as by every operation that stores content.
    pub fn push(&mut self, content: BlockContent) -> BlockId {
        let block = self.allocate(content);
        let id = block.id;
        self.blocks.push(block);
        debug!(block = %id, "appended block");
        id
    }

    /// Insert a block directly after `reference`.
    pub fn insert_after(
        &mut self,
        reference: BlockId,
        content: BlockContent,
    ) -> Result<BlockId, DocumentError> {
        let ix = self.position(reference)?;
        let block = self.allocate(content);
        let id = block.id;
        self.blocks.insert(ix + 1, block);
        debug!(block = %id, after = %reference, "inserted block");
        Ok(id)
    }

    /// Replace the content of a block, keeping its id and position.
    pub fn update(&mut self, id: BlockId, content: BlockContent) -> Result<(), DocumentError> {
        let ix = self.position(id)?;
        self.blocks[ix].content = normalize(content);
        debug!(block = %id, "updated block");
        Ok(())
    }

    /// Remove a block.
    pub fn remove(&mut self, id: BlockId) -> Result<Block, DocumentError> {
        let ix = self.position(id)?;
        debug!(block = %id, "removed block");
        Ok(self.blocks.remove(ix))
    }

    /// Turn every `$$…$$` span in a paragraph's text into an inline math
    /// node.
    ///
    /// Existing inline math is left alone, and spans whose trimmed content
    /// is empty stay literal text. Returns how many spans were converted.
    ///
    /// ```rust
    /// # use dollarmath::{Document, BlockContent, Inline, Options};
    /// let mut doc = Document::new();
    /// let id = doc.push(BlockContent::paragraph("Area: $$\\pi r^2$$."));
    /// assert_eq!(doc.convert_dollar_math(id, &Options::default()), Ok(1));
    /// assert_eq!(doc.get(id).unwrap().content, BlockContent::Paragraph(vec![
    ///     Inline::Text("Area: ".into()),
    ///     Inline::math("\\pi r^2"),
    ///     Inline::Text(".".into()),
    /// ]));
    /// ```
    pub fn convert_dollar_math(
        &mut self,
        id: BlockId,
        options: &Options,
    ) -> Result<usize, DocumentError> {
        let ix = self.position(id)?;
        let inlines = match &mut self.blocks[ix].content {
            BlockContent::Paragraph(inlines) => inlines,
            BlockContent::Math(_) => return Err(DocumentError::NotAParagraph(id)),
        };

        let parser = Parser::new(options);
        let mut converted = 0;
        let mut out: Vec<Inline> = Vec::with_capacity(inlines.len());

        for inline in inlines.drain(..) {
            let text = match inline {
                Inline::Text(text) => text,
                math @ Inline::Math(_) => {
                    out.push(math);
                    continue;
                }
            };

            for segment in parser.parse(&text) {
                if segment.kind == SegmentKind::Math && !segment.content.is_empty() {
                    out.push(Inline::math(segment.content));
                    converted += 1;
                } else {
                    push_text(&mut out, segment.source(&text));
                }
            }
        }

        *inlines = out;
        debug!(block = %id, converted, "converted dollar math");
        Ok(converted)
    }
}

/// Merge adjacent text runs of a paragraph and drop empty ones.
fn normalize(content: BlockContent) -> BlockContent {
    match content {
        BlockContent::Paragraph(inlines) => {
            let mut out = Vec::with_capacity(inlines.len());
            for inline in inlines {
                match inline {
                    Inline::Text(text) => push_text(&mut out, &text),
                    math @ Inline::Math(_) => out.push(math),
                }
            }
            BlockContent::Paragraph(out)
        }
        math @ BlockContent::Math(_) => math,
    }
}

/// Append text, merging with a trailing text run.
fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_string()));
    }
}
