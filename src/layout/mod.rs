//! Positions the invoice regions top to bottom on a [`Surface`].
//!
//! Each stage takes the vertical cursor where its region starts and returns the cursor where the
//! next region starts. Nothing checks the cursor against the bottom of the page: a long item list
//! draws past the edge and the document is still produced on one page.

pub mod header;
pub mod table;
pub mod totals;

use crate::{
    traits::Surface,
    types::{ Error, Invoice, Style, TextStyle, PAGE_HEIGHT },
};

pub use header::render_header;
pub use table::{ build_table, render_table };
pub use totals::{ render_footer, render_totals };

/// x of every line and of the table's left edge
pub const MARGIN_LEFT: f32 = 50.0;

/// where the title baseline sits
pub const CURSOR_START: f32 = PAGE_HEIGHT - 50.0;

pub const PLACEHOLDER_TEXT: &str = "Hola desde Rust";
pub const PLACEHOLDER_X: f32 = 100.0;
pub const PLACEHOLDER_Y: f32 = 750.0;
pub const PLACEHOLDER_STYLE: TextStyle = TextStyle::new()
    .with_font_size(16.0)
    .and_font_style(Style::Bold);

/// Draws header, items table, totals and footer in that order and returns the final cursor
pub fn render_invoice<S: Surface>(surface: &mut S, invoice: &Invoice) -> Result<f32, Error> {
    let y = render_header(surface, invoice, CURSOR_START)?;
    let y = render_table(surface, &invoice.items, y)?;
    let y = render_totals(surface, invoice, y)?;
    render_footer(surface)?;

    Ok(y)
}

/// the document served when no invoice was supplied
pub fn render_placeholder<S: Surface>(surface: &mut S) -> Result<(), Error> {
    surface.place_text(PLACEHOLDER_X, PLACEHOLDER_Y, PLACEHOLDER_TEXT, PLACEHOLDER_STYLE)
}
