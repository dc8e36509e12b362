#![allow(dead_code)]

use factura_pdf::{
    config::ServiceConfig,
    startup::Application,
    traits::Surface,
    types::{Error, Invoice, Row, Table, TextStyle},
};
use serde_json::json;

/// Everything a layout asked the surface to draw, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    Table {
        x: f32,
        top: f32,
        height: f32,
        rows: Vec<Row>,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Surface for Recorder {
    type Output = Vec<Op>;

    fn place_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<(), Error> {
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn place_table(&mut self, x: f32, top: f32, table: &Table) -> Result<(), Error> {
        self.ops.push(Op::Table {
            x,
            top,
            height: table.height(),
            rows: table.rows.clone(),
        });
        Ok(())
    }

    fn finish(self) -> Result<Vec<Op>, Error> {
        Ok(self.ops)
    }
}

/// the text of every text op, tables skipped
pub fn texts(ops: &[Op]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            Op::Table { .. } => None,
        })
        .collect()
}

pub fn text_y(ops: &[Op], wanted: &str) -> Option<f32> {
    ops.iter().find_map(|op| match op {
        Op::Text { y, text, .. } if text == wanted => Some(*y),
        _ => None,
    })
}

pub fn tables(ops: &[Op]) -> Vec<(f32, f32, &[Row])> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Table { top, height, rows, .. } => Some((*top, *height, rows.as_slice())),
            Op::Text { .. } => None,
        })
        .collect()
}

pub fn minimal_invoice() -> Invoice {
    serde_json::from_value(json!({
        "invoiceNumber": "F-001",
        "clientName": "Transportes Rivas",
        "invoiceDate": "2024-03-01"
    }))
    .expect("minimal invoice")
}

pub fn full_invoice() -> Invoice {
    serde_json::from_value(json!({
        "invoiceNumber": "F-002",
        "clientName": "Transportes Rivas",
        "clientIdentification": "J-12345678-9",
        "clientAddress": "Av. Bolivar 12, Valencia",
        "clientPhone": "0414-555-1234",
        "clientEmail": "pagos@rivas.com",
        "invoiceDate": "2024-03-01",
        "items": [
            { "description": "Flete Valencia - Caracas", "quantity": 2, "unitPrice": 150, "total": 300 },
            { "description": "Peaje", "quantity": "1 viaje", "unitPrice": 4.456, "total": 4.456 },
            { "description": "Carga y descarga", "quantity": 1.5, "unitPrice": "20", "total": 30 }
        ],
        "subtotal": 334.456,
        "tax": 53.51296,
        "totalAmount": 387.96896,
        "notes": "Pago a 30 dias"
    }))
    .expect("full invoice")
}

/// The service bound to a random local port and served in the background
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..ServiceConfig::default()
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, port }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
