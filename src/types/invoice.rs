//! The invoice payload posted by the billing system. Every field is optional on the wire: strings
//! default to empty, amounts to zero and the item list to nothing. Text fields also take numbers
//! and booleans and keep their JSON text.
use core::fmt;

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
   #[serde(deserialize_with = "lenient_text")]
    pub invoice_number: String,
   #[serde(deserialize_with = "lenient_text")]
    pub client_name: String,
   #[serde(deserialize_with = "lenient_optional_text")]
    pub client_identification: Option<String>,
   #[serde(deserialize_with = "lenient_optional_text")]
    pub client_address: Option<String>,
   #[serde(deserialize_with = "lenient_optional_text")]
    pub client_phone: Option<String>,
   #[serde(deserialize_with = "lenient_optional_text")]
    pub client_email: Option<String>,
   #[serde(deserialize_with = "lenient_text")]
    pub invoice_date: String,
   #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
    pub subtotal: Amount,
    pub tax: Amount,
    pub total_amount: Amount,
   #[serde(deserialize_with = "lenient_optional_text")]
    pub notes: Option<String>,
}

impl Invoice {
    pub fn identification(&self) -> Option<&str> {
        present(&self.client_identification)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.client_address)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.client_phone)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.client_email)
    }

    pub fn notes(&self) -> Option<&str> {
        present(&self.notes)
    }
}

/// One row of the items table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
   #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    pub quantity: Quantity,
    pub unit_price: Amount,
    pub total: Amount,
}

/// Money value printed with exactly two decimals.
///
/// Accepts a JSON number, a numeric string or `null` (zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let value = match Option::<Raw>::deserialize(deserializer)? {
            None => 0.0,
            Some(Raw::Number(value)) => value,
            Some(Raw::Text(text)) if text.trim().is_empty() => 0.0,
            Some(Raw::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| D::Error::custom(format!("invalid amount {text:?}")))?,
        };

        Ok(Amount(value))
    }
}

/// Quantity column text. The billing system sends numbers or free text and both are shown as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quantity(pub String);

impl Quantity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Quantity(lenient_text(deserializer)?))
    }
}

/// Two decimal rendering shared by every money column and total line. Rounds the binary value to
/// nearest, so `10.456` prints as `10.46` and `10` as `10.00`.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// null is absent, a string is kept and anything else keeps its JSON text
fn json_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(json_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(json_text(Value::deserialize(deserializer)?))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
