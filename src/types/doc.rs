use crate::{
    layout,
    traits::Surface,
    types::{ Error, Invoice, Writer },
};

/// # Main entry point of the library
/// Wraps the optional invoice a request carried. With an invoice the full layout is drawn, without
/// one only the placeholder line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Doc<'a> {
    invoice: Option<&'a Invoice>,
}

impl<'a> Doc<'a> {
    pub fn new(invoice: Option<&'a Invoice>) -> Self {
        Doc { invoice }
    }

    pub fn is_placeholder(&self) -> bool {
        self.invoice.is_none()
    }

    /// Entry point: lays the document out on a fresh `Writer` and returns the finished PDF
    pub fn render(&self) -> Result<Vec<u8>, Error> {
        self.render_on(Writer::default())
    }

    /// lays the document out on any `Surface` and finalizes it
    pub fn render_on<S: Surface>(&self, mut surface: S) -> Result<S::Output, Error> {
        match self.invoice {
            Some(invoice) => {
                tracing::debug!(
                    invoice_number = %invoice.invoice_number,
                    item_count = invoice.items.len(),
                    "rendering invoice"
                );
                let end = layout::render_invoice(&mut surface, invoice)?;
                tracing::debug!(cursor = end, "invoice layout finished");
            }
            None => {
                tracing::debug!("rendering placeholder");
                layout::render_placeholder(&mut surface)?;
            }
        }

        surface.finish()
    }
}
