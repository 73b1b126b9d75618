// Input schemas for the product endpoints.
//
// Types are enforced by deserialization (enum membership, integer fields,
// unknown keys); presence and ranges by `validator`.

use serde::Deserialize;
use validator::Validate;

use crate::database::models::{NewProduct, ProductChanges};
use crate::error::ApiError;
use crate::types::{Color, Size};

/// Identifier taken from the request path
#[derive(Debug, Validate)]
pub struct ProductId {
    #[validate(range(min = 0))]
    pub id: i64,
}

impl ProductId {
    pub fn validated(self) -> Result<i64, ApiError> {
        self.validate()?;
        Ok(self.id)
    }
}

/// Body of POST /v1/products
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(required)]
    pub color: Option<Color>,
    #[validate(required)]
    pub cost: Option<i64>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub retired: Option<i64>,
    #[validate(required)]
    pub size: Option<Size>,
}

impl CreateProduct {
    pub fn validated(self) -> Result<NewProduct, ApiError> {
        self.validate()?;

        match self {
            CreateProduct {
                color: Some(color),
                cost: Some(cost),
                name: Some(name),
                retired: Some(retired),
                size: Some(size),
            } => Ok(NewProduct {
                color,
                cost,
                name,
                retired,
                size,
            }),
            incomplete => Err(ApiError::bad_request(format!(
                "incomplete create payload: {:?}",
                incomplete
            ))),
        }
    }
}

/// Body of PATCH /v1/products
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[validate(required, range(min = 0))]
    pub id: Option<i64>,
    pub color: Option<Color>,
    pub cost: Option<i64>,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub retired: Option<i64>,
    pub size: Option<Size>,
}

impl UpdateProduct {
    /// Lookup key plus the fields to overwrite
    pub fn validated(self) -> Result<(i64, ProductChanges), ApiError> {
        self.validate()?;

        let id = self
            .id
            .ok_or_else(|| ApiError::bad_request("update payload is missing id"))?;

        Ok((
            id,
            ProductChanges {
                color: self.color,
                cost: self.cost,
                name: self.name,
                retired: self.retired,
                size: self.size,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> serde_json::Result<T> {
        serde_json::from_value(value)
    }

    #[test]
    fn identifier_must_not_be_negative() {
        assert_eq!(ProductId { id: 0 }.validated().unwrap(), 0);
        assert!(matches!(
            ProductId { id: -1 }.validated(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn create_accepts_complete_payload() {
        let payload: CreateProduct = parse(json!({
            "color": "blue", "size": "small", "name": "widget", "cost": 10, "retired": 0
        }))
        .unwrap();

        let product = payload.validated().unwrap();
        assert_eq!(product.color, Color::Blue);
        assert_eq!(product.size, Size::Small);
        assert_eq!(product.name, "widget");
        assert_eq!(product.cost, 10);
    }

    #[test]
    fn create_reports_each_missing_field() {
        let payload: CreateProduct = parse(json!({ "color": "red", "cost": 1 })).unwrap();

        let Err(ApiError::Validation(errors)) = payload.validated() else {
            panic!("expected validation failure");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("retired"));
        assert!(fields.contains_key("size"));
        assert!(!fields.contains_key("color"));
    }

    #[test]
    fn create_rejects_empty_name() {
        let payload: CreateProduct = parse(json!({
            "color": "red", "size": "large", "name": "", "cost": 1, "retired": 0
        }))
        .unwrap();
        assert!(payload.validated().is_err());
    }

    #[test]
    fn create_rejects_client_supplied_id() {
        let result: serde_json::Result<CreateProduct> = parse(json!({
            "id": 5, "color": "red", "size": "large", "name": "x", "cost": 1, "retired": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_unknown_enum_values_and_wrong_types() {
        assert!(parse::<CreateProduct>(json!({ "color": "purple" })).is_err());
        assert!(parse::<CreateProduct>(json!({ "size": "huge" })).is_err());
        assert!(parse::<CreateProduct>(json!({ "cost": "10" })).is_err());
    }

    #[test]
    fn update_requires_only_id() {
        let payload: UpdateProduct = parse(json!({ "id": 3, "cost": 50 })).unwrap();
        let (id, changes) = payload.validated().unwrap();

        assert_eq!(id, 3);
        assert_eq!(
            changes,
            ProductChanges {
                cost: Some(50),
                ..Default::default()
            }
        );

        let payload: UpdateProduct = parse(json!({ "cost": 50 })).unwrap();
        assert!(matches!(payload.validated(), Err(ApiError::Validation(_))));
    }
}
