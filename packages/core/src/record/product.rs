//! Typed product record
//!
//! Field names form a closed set. Both the service's member names
//! (`ProductID`, `ProductName`, `UnitPrice`) and the short forms (`Id`,
//! `Name`, `Price`) are recognized; anything else is absent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::core::{FieldValue, Record};

/// Catalogue entry as published by the product service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub id: i64,
    #[serde(rename = "ProductName")]
    pub name: String,
    #[serde(rename = "UnitPrice")]
    pub price: f64,
}

/// Recognized field names of [`Product`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Price,
}

impl FromStr for ProductField {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ProductID" | "Id" => Ok(ProductField::Id),
            "ProductName" | "Name" => Ok(ProductField::Name),
            "UnitPrice" | "Price" => Ok(ProductField::Price),
            _ => Err(()),
        }
    }
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Build a product from a dynamic record
    ///
    /// Returns `None` when any field is missing or of the wrong type, or
    /// when the id is not a whole number within `i64` range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_record<R: Record + ?Sized>(record: &R) -> Option<Self> {
        // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
        let id = match record.field("ProductID")? {
            FieldValue::Number(n)
                if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 =>
            {
                n as i64
            }
            _ => return None,
        };
        let name = match record.field("ProductName")? {
            FieldValue::Text(s) => s.to_string(),
            _ => return None,
        };
        let price = match record.field("UnitPrice")? {
            FieldValue::Number(n) => n,
            _ => return None,
        };
        Some(Self { id, name, price })
    }
}

impl Record for Product {
    #[allow(clippy::cast_precision_loss)]
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let field = name.parse::<ProductField>().ok()?;
        Some(match field {
            ProductField::Id => FieldValue::Number(self.id as f64),
            ProductField::Name => FieldValue::Text(&self.name),
            ProductField::Price => FieldValue::Number(self.price),
        })
    }
}
