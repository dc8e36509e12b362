use pdf_writer::{ Name, Ref };

use crate::types::Style;

/// ties a registered Type1 font object to the face it renders
#[derive(Debug, Clone, Copy)]
pub struct FontReference {
    pub id: Ref,
    pub style: Style,
    pub name: Name<'static>,
}

impl FontReference {
    pub fn new(id: Ref, style: Style) -> Self {
        FontReference {
            id,
            style,
            name: Name(style.base_font()),
        }
    }
}
