use crate::{
    layout::MARGIN_LEFT,
    traits::Surface,
    types::{ Error, Invoice, Style, TextStyle },
};

pub const TITLE_STYLE: TextStyle = TextStyle::new()
    .with_font_size(16.0)
    .and_font_style(Style::Bold);
pub const FIELD_STYLE: TextStyle = TextStyle::new().with_font_size(10.0);
pub const SECTION_STYLE: TextStyle = TextStyle::new()
    .with_font_size(12.0)
    .and_font_style(Style::Bold);

pub const TITLE_ADVANCE: f32 = 30.0;
pub const FIELD_ADVANCE: f32 = 15.0;
/// extra space between the date line and the "Items:" label
pub const SECTION_GAP: f32 = 10.0;
pub const SECTION_ADVANCE: f32 = 20.0;

type FieldAccessor = fn(&Invoice) -> Option<&str>;

/// Contact lines between the client name and the date, in print order. A line is drawn only when
/// its field holds a non-empty value; skipped lines take no vertical space.
pub const OPTIONAL_FIELDS: &[(&str, FieldAccessor)] = &[
    ("Cédula/RIF", Invoice::identification),
    ("Dirección", Invoice::address),
    ("Teléfono", Invoice::phone),
    ("Email", Invoice::email),
];

/// Title, client block, date and the "Items:" label. Returns the cursor for the table's top edge.
pub fn render_header<S: Surface>(surface: &mut S, invoice: &Invoice, y: f32) -> Result<f32, Error> {
    let mut y = y;

    surface.place_text(MARGIN_LEFT, y, &format!("Factura #{}", invoice.invoice_number), TITLE_STYLE)?;
    y -= TITLE_ADVANCE;

    y = field_line(surface, y, "Cliente", &invoice.client_name)?;

    for (label, field) in OPTIONAL_FIELDS {
        if let Some(value) = field(invoice) {
            y = field_line(surface, y, label, value)?;
        }
    }

    y = field_line(surface, y, "Fecha", &invoice.invoice_date)?;
    y -= SECTION_GAP;

    surface.place_text(MARGIN_LEFT, y, "Items:", SECTION_STYLE)?;
    y -= SECTION_ADVANCE;

    Ok(y)
}

fn field_line<S: Surface>(surface: &mut S, y: f32, label: &str, value: &str) -> Result<f32, Error> {
    surface.place_text(MARGIN_LEFT, y, &format!("{label}: {value}"), FIELD_STYLE)?;

    Ok(y - FIELD_ADVANCE)
}
