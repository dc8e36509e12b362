use crate::types::Style;

/// Advance widths for a font family, in the 1/1000 em units used by AFM files. Registering a new
/// family means supplying the widths for each face the layout draws with (normal, bold, oblique).
pub trait FontType {
    fn new() -> Self;
    fn normal(&self, ch: &char, font_size: f32) -> f32;
    fn bold(&self, ch: &char, font_size: f32) -> f32;
    fn oblique(&self, ch: &char, font_size: f32) -> f32;
    fn standardize(width: f32, font_size: f32) -> f32;

    fn char_width(&self, ch: &char, font_style: &Style, font_size: f32) -> f32 {
        match *font_style {
            Style::Normal => self.normal(ch, font_size),
            Style::Bold => self.bold(ch, font_size),
            Style::Oblique => self.oblique(ch, font_size),
        }
    }

    /// width of a whole string set in one face
    fn text_width(&self, text: &str, font_style: &Style, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width(&ch, font_style, font_size))
            .sum()
    }
}
