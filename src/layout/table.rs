use crate::{
    layout::MARGIN_LEFT,
    traits::Surface,
    types::{ format_amount, Error, LineItem, Table, COLUMN_COUNT },
};

const INCH: f32 = 72.0;

/// description, quantity, unit price, total in a 2.5 : 1 : 1.2 : 1.2 ratio
pub const COLUMN_WIDTHS: [f32; COLUMN_COUNT] = [2.5 * INCH, 1.0 * INCH, 1.2 * INCH, 1.2 * INCH];
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = ["Descripción", "Cantidad", "Precio Unitario", "Total"];
pub const ROW_HEIGHT: f32 = 18.0;
/// space left between the bottom of the table and the subtotal line
pub const TABLE_GAP: f32 = 20.0;

/// header row plus one row per item, in input order
pub fn build_table(items: &[LineItem]) -> Table {
    let mut table = Table::new(COLUMN_WIDTHS, ROW_HEIGHT, COLUMN_TITLES);

    for item in items {
        table.push_row([
            item.description.clone(),
            item.quantity.as_str().to_string(),
            format_amount(item.unit_price.0),
            format_amount(item.total.0),
        ]);
    }

    table
}

/// Draws the items table with its top edge at `y` and returns the cursor below it
pub fn render_table<S: Surface>(surface: &mut S, items: &[LineItem], y: f32) -> Result<f32, Error> {
    let table = build_table(items);

    surface.place_table(MARGIN_LEFT, y, &table)?;

    Ok(y - table.height() - TABLE_GAP)
}
