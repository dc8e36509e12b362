use crate::types::Style;

pub const COLUMN_COUNT: usize = 4;

pub type Row = [String; COLUMN_COUNT];

/// horizontal placement of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

/// Cell styling for the items grid. The values are fixed by the invoice layout; only
/// `TableStyle::default()` is ever drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_fill: Rgb,
    pub grid_color: Rgb,
    pub grid_width: f32,
    pub header_font: Style,
    pub body_font: Style,
    pub font_size: f32,
    pub padding_left: f32,
    // distance from the bottom edge of a row up to the text baseline
    pub baseline_offset: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            header_fill: Rgb(0.827, 0.827, 0.827),
            grid_color: Rgb(0.5, 0.5, 0.5),
            grid_width: 0.5,
            header_font: Style::Bold,
            body_font: Style::Normal,
            font_size: 9.0,
            padding_left: 6.0,
            baseline_offset: 6.0,
        }
    }
}

/// A grid with a header row followed by body rows. Every row has the same fixed height, text is
/// never measured or wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub column_widths: [f32; COLUMN_COUNT],
    pub row_height: f32,
    pub rows: Vec<Row>,
    pub style: TableStyle,
}

impl Table {
    pub fn new(column_widths: [f32; COLUMN_COUNT], row_height: f32, header: [&str; COLUMN_COUNT]) -> Self {
        Table {
            column_widths,
            row_height,
            rows: vec![header.map(str::to_string)],
            style: TableStyle::default(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn height(&self) -> f32 {
        self.row_height * self.rows.len() as f32
    }

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// left edge of each column relative to the table's left edge
    pub fn column_offsets(&self) -> [f32; COLUMN_COUNT] {
        let mut offsets = [0.0; COLUMN_COUNT];
        let mut x = 0.0;

        for (offset, width) in offsets.iter_mut().zip(self.column_widths) {
            *offset = x;
            x += width;
        }

        offsets
    }

    /// body cells right of the description column are centred, everything else hugs the left
    pub fn alignment(&self, row: usize, column: usize) -> CellAlignment {
        if row > 0 && column > 0 {
            CellAlignment::Center
        } else {
            CellAlignment::Left
        }
    }

    pub fn font_style(&self, row: usize) -> Style {
        if row == 0 {
            self.style.header_font
        } else {
            self.style.body_font
        }
    }
}
