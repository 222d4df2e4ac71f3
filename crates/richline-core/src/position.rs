//! The document position contract.
//!
//! Every other module in this crate addresses the host document exclusively
//! through [`PositionedDocument`]: opaque, totally ordered positions plus a
//! small set of traversal and mutation operations. There is deliberately no
//! "line N" or "character offset N" capability here; line-indexed addressing
//! is reconstructed on top of this contract by [`projection`](crate::projection)
//! and [`locate`](crate::locate).
//!
//! Positions are only meaningful against the document state they were obtained
//! from. Callers must not hold a position across a mutation; every engine
//! operation re-derives the positions it needs.

/// An RGB color used by [`TextStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// White, the base foreground color of the host editor.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A formatting specification applied to a document range.
///
/// Applying a style never alters text content or length; it is pure
/// presentation state carried alongside the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f32,
    /// Bold weight flag.
    pub bold: bool,
    /// Foreground color.
    pub color: Color,
}

/// The host's base text style: regular 14pt white.
pub const DEFAULT_TEXT_STYLE: TextStyle = TextStyle {
    font_size: 14.0,
    bold: false,
    color: Color::WHITE,
};

/// The minimal capability set the engine requires from a rich-text document.
///
/// Any storage strategy satisfying this contract works: the bundled
/// [`RichTextBuffer`](crate::buffer::RichTextBuffer), a piece table, or a
/// wrapper around a widget's native cursor API. The engine never assumes
/// anything beyond these operations.
pub trait PositionedDocument {
    /// Opaque cursor into the document, totally ordered in document order.
    type Position: Ord + Clone;

    /// Position before the first addressable unit.
    fn start(&self) -> Self::Position;

    /// Position after the last addressable unit.
    fn end(&self) -> Self::Position;

    /// The smallest next addressable position after `pos`, or `None` at
    /// document end.
    fn step_forward(&self, pos: &Self::Position) -> Option<Self::Position>;

    /// Exact text contained in `[a, b)`. Inverted ranges yield an empty
    /// string.
    fn text_of(&self, a: &Self::Position, b: &Self::Position) -> String;

    /// Apply `style` to `[a, b)`. Idempotent; must not alter text content or
    /// length.
    fn apply_style(&mut self, a: &Self::Position, b: &Self::Position, style: &TextStyle);

    /// Insert `text` at `pos`, returning the position just after the inserted
    /// text.
    fn insert_text(&mut self, pos: &Self::Position, text: &str) -> Self::Position;

    /// Replace `[a, b)` with `text`, returning the position just after the
    /// replacement.
    fn replace_range(&mut self, a: &Self::Position, b: &Self::Position, text: &str)
    -> Self::Position;

    /// Current caret position.
    fn caret(&self) -> Self::Position;

    /// Move the caret to `pos`.
    fn set_caret(&mut self, pos: Self::Position);

    /// Current selection in document order, if non-empty.
    fn selection(&self) -> Option<(Self::Position, Self::Position)>;

    /// Select `[a, b)` and move the caret to the selection end.
    fn select(&mut self, a: Self::Position, b: Self::Position);
}
