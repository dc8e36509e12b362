use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    handlers::ApiError,
    startup::AppState,
    types::{ Doc, Invoice },
};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// GET: the placeholder document
pub async fn placeholder_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    render_response(&state, None)
}

/// POST: the invoice in the JSON body. An empty body or a JSON `null` is treated like a GET.
pub async fn invoice_pdf(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return render_response(&state, None);
    }

    let invoice: Option<Invoice> = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected invoice payload");
        e
    })?;

    render_response(&state, invoice.as_ref())
}

fn render_response(state: &AppState, invoice: Option<&Invoice>) -> Result<Response, ApiError> {
    let doc = Doc::new(invoice);

    let bytes = doc.render().map_err(|e| {
        tracing::error!(error = %e, "failed to render PDF");
        e
    })?;

    tracing::info!(
        placeholder = doc.is_placeholder(),
        invoice_number = invoice.map(|invoice| invoice.invoice_number.as_str()).unwrap_or_default(),
        item_count = invoice.map(|invoice| invoice.items.len()).unwrap_or_default(),
        bytes = bytes.len(),
        "PDF rendered"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", state.config.download_name),
            ),
        ],
        bytes,
    )
        .into_response())
}
