use crate::types::Style;

/// font settings for a single line of text
/// ```
/// use factura_pdf::types::{Style, TextStyle};
///
/// let title = TextStyle::new()
///     .with_font_size(16.0)        // f32
///     .and_font_style(Style::Bold); // Style
/// assert_eq!(title.font_size, 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_style: Style,
    pub font_size: f32,
}

impl TextStyle {
    /// default settings:
    /// - Font style: Normal
    /// - Font size: 10.0
    pub const fn new() -> Self {
        TextStyle {
            font_style: Style::Normal,
            font_size: 10.0,
        }
    }

    /// builder function setting font size
    pub const fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting the font face
    pub const fn and_font_style(mut self, font_style: Style) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::new()
    }
}
