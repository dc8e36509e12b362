use pdf_writer::{ Content, Ref };

/// US Letter, in points
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

/// container for the single page of a document and its content stream
pub struct Page {
    pub page_id: Ref,
    pub content_id: Ref,
    pub content: Content,
}

impl Page {
    pub fn new(page_id: Ref, content_id: Ref) -> Self {
        Page {
            page_id,
            content_id,
            content: Content::new(),
        }
    }
}
