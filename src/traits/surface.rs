use crate::types::{Error, Table, TextStyle};

/// A drawing target for one page. Coordinates are PDF user space: points, origin at the bottom
/// left, y growing upward.
///
/// The layout only ever places text and tables and then finalizes, so any backend that can do
/// those three things can render an invoice.
pub trait Surface {
    type Output;

    /// draws `text` with its baseline starting at (`x`, `y`)
    fn place_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<(), Error>;

    /// draws `table` with its top left corner at (`x`, `top`)
    fn place_table(&mut self, x: f32, top: f32, table: &Table) -> Result<(), Error>;

    /// closes the page and hands back whatever the surface produced
    fn finish(self) -> Result<Self::Output, Error>;
}
