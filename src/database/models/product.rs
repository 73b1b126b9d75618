use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{Color, Size};

/// A stored product row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub color: Color,
    pub cost: i64,
    pub name: String,
    pub retired: i64,
    pub size: Size,
}

/// Field values for a row that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub color: Color,
    pub cost: i64,
    pub name: String,
    pub retired: i64,
    pub size: Size,
}

/// Partial set of field values applied on top of a stored row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub color: Option<Color>,
    pub cost: Option<i64>,
    pub name: Option<String>,
    pub retired: Option<i64>,
    pub size: Option<Size>,
}

impl Product {
    /// Overwrite stored fields with the supplied ones. The id is kept.
    pub fn merge(self, changes: ProductChanges) -> Product {
        Product {
            id: self.id,
            color: changes.color.unwrap_or(self.color),
            cost: changes.cost.unwrap_or(self.cost),
            name: changes.name.unwrap_or(self.name),
            retired: changes.retired.unwrap_or(self.retired),
            size: changes.size.unwrap_or(self.size),
        }
    }

    pub fn is_retired(&self) -> bool {
        self.retired != 0
    }
}
