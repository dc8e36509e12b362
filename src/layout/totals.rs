use crate::{
    layout::MARGIN_LEFT,
    traits::Surface,
    types::{ Error, Invoice, Style, TextStyle },
};

pub const TOTALS_STYLE: TextStyle = TextStyle::new()
    .with_font_size(11.0)
    .and_font_style(Style::Bold);
pub const NOTES_STYLE: TextStyle = TextStyle::new().with_font_size(10.0);
pub const FOOTER_STYLE: TextStyle = TextStyle::new()
    .with_font_size(8.0)
    .and_font_style(Style::Oblique);

pub const LINE_ADVANCE: f32 = 15.0;
/// the grand total gets a little more room before the notes
pub const TOTAL_ADVANCE: f32 = 20.0;

pub const FOOTER_TEXT: &str = "Generado por TransportSys";
/// the footer sits at a fixed height no matter how long the invoice is
pub const FOOTER_Y: f32 = 30.0;

/// Subtotal, tax, grand total and the notes line when there are notes
pub fn render_totals<S: Surface>(surface: &mut S, invoice: &Invoice, y: f32) -> Result<f32, Error> {
    let mut y = y;

    surface.place_text(MARGIN_LEFT, y, &format!("Subtotal: {}", invoice.subtotal), TOTALS_STYLE)?;
    y -= LINE_ADVANCE;
    surface.place_text(MARGIN_LEFT, y, &format!("Impuesto: {}", invoice.tax), TOTALS_STYLE)?;
    y -= LINE_ADVANCE;
    surface.place_text(MARGIN_LEFT, y, &format!("Total: {}", invoice.total_amount), TOTALS_STYLE)?;
    y -= TOTAL_ADVANCE;

    if let Some(notes) = invoice.notes() {
        surface.place_text(MARGIN_LEFT, y, &format!("Notas: {notes}"), NOTES_STYLE)?;
        y -= LINE_ADVANCE;
    }

    Ok(y)
}

pub fn render_footer<S: Surface>(surface: &mut S) -> Result<(), Error> {
    surface.place_text(MARGIN_LEFT, FOOTER_Y, FOOTER_TEXT, FOOTER_STYLE)
}
