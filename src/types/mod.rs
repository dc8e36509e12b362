mod doc;
mod error;
mod font;
mod font_reference;
mod font_style;
mod invoice;
mod page;
mod table;
mod text;
mod writer;

pub mod winansi;

pub use doc::Doc;
pub use error::Error;
pub use font::Font;
pub use font_reference::FontReference;
pub use font_style::Style;
pub use invoice::{ format_amount, Amount, Invoice, LineItem, Quantity };
pub use page::{ Page, PAGE_HEIGHT, PAGE_WIDTH };
pub use table::{ CellAlignment, Rgb, Row, Table, TableStyle, COLUMN_COUNT };
pub use text::TextStyle;
pub use writer::Writer;
