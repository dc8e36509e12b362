//! # Introduction
//!
//! Factura PDF turns the invoice JSON produced by the TransportSys billing backend into a single
//! page PDF. Built on top of pdf_writer (Typst), the layout is fixed: a title, the client block,
//! an items table, the totals and a footer line, all set in the standard Helvetica faces so no
//! font has to be embedded.
//!
//! Layout Road Map:
//! - [X] Header with optional contact lines (identification, address, phone, email)
//! - [X] Items table with grid, shaded header row and centred value columns
//! - [X] Two decimal totals and optional notes
//! - [X] Placeholder document when no invoice is supplied
//! - [ ] Second page when the items table runs past the bottom margin
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! The main entry point is the `Doc` struct, which borrows an `Invoice` deserialized by Serde from
//! the request body. Its `.render()` method interfaces with pdf_writer to return the PDF bytes.
//!
//! ### Simple render
//! ```
//! use factura_pdf::types::{Doc, Invoice};
//!
//! let json = r#"{ "invoiceNumber": "F-001", "clientName": "Transportes Rivas", "subtotal": 100 }"#;
//!
//! // deserialize the json string
//! let invoice: Invoice = serde_json::from_str(json).unwrap();
//!
//! // call the .render() method on the doc struct
//! let pdf_file = Doc::new(Some(&invoice)).render().unwrap();
//!
//! assert!(pdf_file.starts_with(b"%PDF-"));
//! ```
//!
//! # Service
//! The `factura-pdf` binary serves the renderer over HTTP on `/pdf`: `GET` returns the
//! placeholder document, `POST` renders the invoice in the JSON body. See `config::ServiceConfig`
//! for the settings it reads.
pub mod config;
pub mod handlers;
pub mod layout;
pub mod observability;
pub mod startup;
pub mod traits;
pub mod types;
