mod error;
mod health;
mod pdf;

pub use error::ApiError;
pub use health::health_check;
pub use pdf::{ invoice_pdf, placeholder_pdf, PDF_CONTENT_TYPE };
