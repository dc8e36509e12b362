use pdf_writer::{ Name, Pdf, Rect, Ref, Str };

use crate::{
    traits::{ FontType, Surface },
    types::{
        winansi,
        CellAlignment,
        Error,
        Font,
        FontReference,
        Page,
        Style,
        Table,
        TextStyle,
        PAGE_HEIGHT,
        PAGE_WIDTH,
}};

/// the rendering engine, a `Surface` that writes one PDF page
/// contains
/// - the page and its content stream
/// - page tree and catalog references
/// - the registered Helvetica faces
/// - page size
pub struct Writer {
    pub page_tree_id: Ref,
    pub catalog_id: Ref,
    pub page: Page,
    pub font_refs: Vec<FontReference>,
    pub font: Font,
    pub page_height: f32,
    pub page_width: f32,
}

/// Allocates the page tree, catalog and the single page, then registers the three Helvetica faces
impl Default for Writer {
    fn default() -> Self {
        let mut alloc = Ref::new(1);

        let page_tree_id = alloc.bump();
        let catalog_id = alloc.bump();
        let page_id = alloc.bump();
        let content_id = alloc.bump();

        let font_refs = [Style::Normal, Style::Bold, Style::Oblique]
            .into_iter()
            .map(|style| FontReference::new(alloc.bump(), style))
            .collect();

        Writer {
            page_tree_id,
            catalog_id,
            page: Page::new(page_id, content_id),
            font_refs,
            font: Font::new(),
            page_height: PAGE_HEIGHT,
            page_width: PAGE_WIDTH,
        }
    }
}

impl Writer {
    fn font_ref(&self, style: Style) -> Result<FontReference, Error> {
        self.font_refs
            .iter()
            .find(|font| font.style == style)
            .copied()
            .ok_or(Error::MissingFont(style))
    }

    fn fill_header_row(&mut self, x: f32, top: f32, table: &Table) {
        let fill = table.style.header_fill;
        let content = &mut self.page.content;

        content.save_state();
        content.set_fill_rgb(fill.0, fill.1, fill.2);
        content.rect(x, top - table.row_height, table.width(), table.row_height);
        content.fill_nonzero();
        content.restore_state();
    }

    fn stroke_grid(&mut self, x: f32, top: f32, table: &Table) {
        let style = &table.style;
        let width = table.width();
        let bottom = top - table.height();
        let content = &mut self.page.content;

        content.save_state();
        content.set_line_width(style.grid_width);
        content.set_stroke_rgb(style.grid_color.0, style.grid_color.1, style.grid_color.2);

        for row in 0..=table.row_count() {
            let y = top - table.row_height * row as f32;
            content.move_to(x, y);
            content.line_to(x + width, y);
        }

        let mut column_x = x;
        content.move_to(column_x, top);
        content.line_to(column_x, bottom);

        for column_width in table.column_widths {
            column_x += column_width;
            content.move_to(column_x, top);
            content.line_to(column_x, bottom);
        }

        content.stroke();
        content.restore_state();
    }
}

impl Surface for Writer {
    type Output = Vec<u8>;

    fn place_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<(), Error> {
        let bytes = winansi::encode(text);
        let font = self.font_ref(style.font_style)?;
        let content = &mut self.page.content;

        content.begin_text();
        content.set_font(font.name, style.font_size);
        content.next_line(x, y);
        content.show(Str(&bytes));
        content.end_text();

        Ok(())
    }

    fn place_table(&mut self, x: f32, top: f32, table: &Table) -> Result<(), Error> {
        self.fill_header_row(x, top, table);

        let offsets = table.column_offsets();
        let font_size = table.style.font_size;

        for (row_index, row) in table.rows.iter().enumerate() {
            let baseline = top - table.row_height * (row_index + 1) as f32 + table.style.baseline_offset;
            let font_style = table.font_style(row_index);
            let text_style = TextStyle::new()
                .with_font_size(font_size)
                .and_font_style(font_style);

            for (column, cell) in row.iter().enumerate() {
                let cell_x = x + offsets[column];

                let text_x = match table.alignment(row_index, column) {
                    CellAlignment::Left => cell_x + table.style.padding_left,
                    CellAlignment::Center => {
                        let text_width = self.font.text_width(cell, &font_style, font_size);
                        cell_x + (table.column_widths[column] - text_width) / 2.0
                    }
                };

                self.place_text(text_x, baseline, cell, text_style)?;
            }
        }

        self.stroke_grid(x, top, table);

        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        let mut pdf = Pdf::new();

        pdf.catalog(self.catalog_id).pages(self.page_tree_id);
        pdf.pages(self.page_tree_id)
            .kids([self.page.page_id])
            .count(1);

        {
            let mut pdf_page = pdf.page(self.page.page_id);

            pdf_page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height));
            pdf_page.parent(self.page_tree_id);
            pdf_page.contents(self.page.content_id);

            let mut obj = pdf_page.resources();
            let mut fonts = obj.fonts();

            for ref_obj in self.font_refs.iter() {
                fonts.pair(ref_obj.name, ref_obj.id);
            }
        }

        for ref_obj in self.font_refs.iter() {
            pdf.type1_font(ref_obj.id)
                .base_font(ref_obj.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let stream = self.page.content.finish();
        pdf.stream(self.page.content_id, &stream);

        Ok(pdf.finish())
    }
}
