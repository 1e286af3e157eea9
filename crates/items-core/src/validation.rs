//! Validation schemas for request bodies, path ids, and list queries.
//!
//! Each field is described by an explicit rule struct (`TextRule`,
//! `PriceRule`, `FlagRule`, `PageRule`). Schemas run every rule and collect
//! all failures into a [`ValidationErrors`] instead of stopping at the first
//! one, so callers can report every offending field at once.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{
    CreateItemInput, DEFAULT_LIMIT, DEFAULT_PAGE, ItemId, ListQuery, UpdateItemInput,
};

// ============================================================================
// Errors
// ============================================================================

/// The kind of rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// A required field is missing.
    Required,
    /// The field has the wrong JSON type.
    Type,
    /// A string is shorter than allowed.
    MinLength,
    /// A string is longer than allowed.
    MaxLength,
    /// A number is below zero.
    Minimum,
    /// A number must be strictly greater than zero.
    Positive,
    /// A query value must be a positive decimal integer.
    PositiveInteger,
    /// A string does not match the expected format.
    Format,
}

impl Constraint {
    /// Shape constraints are the structural schema checks (presence, type,
    /// length bounds, non-negative numbers, formats). Only a zero price, which
    /// passes those, is left as a semantic failure.
    #[must_use]
    pub const fn is_shape(self) -> bool {
        !matches!(self, Self::Positive)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Minimum => "minimum",
            Self::Positive => "positive",
            Self::PositiveInteger => "positive_integer",
            Self::Format => "format",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub constraint: Constraint,
}

/// Every field error found while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed{}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// A collection holding one error.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>, constraint: Constraint) -> Self {
        let mut errors = Self::default();
        errors.push(field, message, constraint);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>, constraint: Constraint) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
            constraint,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// True if any error describes a malformed request rather than a
    /// semantic violation.
    #[must_use]
    pub fn has_shape_errors(&self) -> bool {
        self.errors.iter().any(|e| e.constraint.is_shape())
    }

    /// Errors reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Convert into a result, failing if any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, error)| {
            let sep = if i == 0 { ": " } else { "; " };
            format!("{sep}{}: {}", error.field, error.message)
        })
        .collect()
}

// ============================================================================
// Field rules
// ============================================================================

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Rule for a string field with character-count bounds.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
    pub min_chars: usize,
    pub max_chars: Option<usize>,
    /// Reported when the field is missing or shorter than `min_chars`.
    pub required_message: &'static str,
    /// Reported when the field exceeds `max_chars`.
    pub too_long_message: &'static str,
}

impl TextRule {
    /// Check `value`, recording failures. Returns the string when valid.
    pub fn check(
        &self,
        value: Option<&Value>,
        presence: Presence,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        let value = match value {
            None if presence == Presence::Required => {
                errors.push(self.field, self.required_message, Constraint::Required);
                return None;
            }
            None => return None,
            Some(value) => value,
        };

        let Some(text) = value.as_str() else {
            errors.push(
                self.field,
                format!("Expected string, received {}", json_type_name(value)),
                Constraint::Type,
            );
            return None;
        };

        let chars = text.chars().count();
        if chars < self.min_chars {
            errors.push(self.field, self.required_message, Constraint::MinLength);
            return None;
        }
        if self.max_chars.is_some_and(|max| chars > max) {
            errors.push(self.field, self.too_long_message, Constraint::MaxLength);
            return None;
        }

        Some(text.to_string())
    }
}

/// Rule for a strictly positive number.
#[derive(Debug, Clone, Copy)]
pub struct PriceRule {
    pub field: &'static str,
    pub required_message: &'static str,
    pub message: &'static str,
}

impl PriceRule {
    pub fn check(
        &self,
        value: Option<&Value>,
        presence: Presence,
        errors: &mut ValidationErrors,
    ) -> Option<f64> {
        let value = match value {
            None if presence == Presence::Required => {
                errors.push(self.field, self.required_message, Constraint::Required);
                return None;
            }
            None => return None,
            Some(value) => value,
        };

        let Some(number) = value.as_f64() else {
            errors.push(
                self.field,
                format!("Expected number, received {}", json_type_name(value)),
                Constraint::Type,
            );
            return None;
        };

        if !number.is_finite() || number < 0.0 {
            errors.push(self.field, self.message, Constraint::Minimum);
            return None;
        }
        if number == 0.0 {
            errors.push(self.field, self.message, Constraint::Positive);
            return None;
        }

        Some(number)
    }
}

/// Rule for an optional boolean.
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    pub field: &'static str,
}

impl FlagRule {
    pub fn check(&self, value: Option<&Value>, errors: &mut ValidationErrors) -> Option<bool> {
        let value = value?;
        match value.as_bool() {
            Some(flag) => Some(flag),
            None => {
                errors.push(
                    self.field,
                    format!("Expected boolean, received {}", json_type_name(value)),
                    Constraint::Type,
                );
                None
            }
        }
    }
}

/// Rule for a positive integer carried as a query-string value.
#[derive(Debug, Clone, Copy)]
pub struct PageRule {
    pub field: &'static str,
    pub default: u32,
}

impl PageRule {
    pub fn check(&self, raw: Option<&str>, errors: &mut ValidationErrors) -> u32 {
        let Some(raw) = raw else {
            return self.default;
        };

        let parsed = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse::<u32>().ok().filter(|n| *n > 0)
        } else {
            None
        };

        parsed.unwrap_or_else(|| {
            errors.push(
                self.field,
                format!("{} must be a positive integer", self.field),
                Constraint::PositiveInteger,
            );
            self.default
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Item schemas
// ============================================================================

pub const NAME: TextRule = TextRule {
    field: "name",
    min_chars: 1,
    max_chars: Some(100),
    required_message: "Name is required",
    too_long_message: "Name must be less than 100 characters",
};

pub const DESCRIPTION: TextRule = TextRule {
    field: "description",
    min_chars: 0,
    max_chars: Some(500),
    required_message: "Description is required",
    too_long_message: "Description must be less than 500 characters",
};

pub const CATEGORY: TextRule = TextRule {
    field: "category",
    min_chars: 1,
    max_chars: None,
    required_message: "Category is required",
    too_long_message: "",
};

pub const PRICE: PriceRule = PriceRule {
    field: "price",
    required_message: "Price is required",
    message: "Price must be a positive number",
};

pub const IN_STOCK: FlagRule = FlagRule { field: "inStock" };

pub const PAGE: PageRule = PageRule {
    field: "page",
    default: DEFAULT_PAGE,
};

pub const LIMIT: PageRule = PageRule {
    field: "limit",
    default: DEFAULT_LIMIT,
};

/// Message reported for a malformed item id.
pub const INVALID_ID_MESSAGE: &str = "Invalid item ID format";

/// A type that can be parsed and validated from a JSON value.
pub trait Schema: Sized {
    fn parse(value: &Value) -> Result<Self, ValidationErrors>;
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    value.as_object().ok_or_else(|| {
        ValidationErrors::single(
            "body",
            format!("Expected object, received {}", json_type_name(value)),
            Constraint::Type,
        )
    })
}

impl Schema for CreateItemInput {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        let body = as_object(value)?;
        let mut errors = ValidationErrors::default();

        let name = NAME.check(body.get("name"), Presence::Required, &mut errors);
        let description = DESCRIPTION.check(body.get("description"), Presence::Optional, &mut errors);
        let price = PRICE.check(body.get("price"), Presence::Required, &mut errors);
        let category = CATEGORY.check(body.get("category"), Presence::Required, &mut errors);
        let in_stock = IN_STOCK.check(body.get("inStock"), &mut errors);

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) if errors.is_empty() => Ok(Self {
                name,
                description,
                price,
                category,
                in_stock: in_stock.unwrap_or(true),
            }),
            _ => Err(errors),
        }
    }
}

impl Schema for UpdateItemInput {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        let body = as_object(value)?;
        let mut errors = ValidationErrors::default();

        let input = Self {
            name: NAME.check(body.get("name"), Presence::Optional, &mut errors),
            description: DESCRIPTION.check(body.get("description"), Presence::Optional, &mut errors),
            price: PRICE.check(body.get("price"), Presence::Optional, &mut errors),
            category: CATEGORY.check(body.get("category"), Presence::Optional, &mut errors),
            in_stock: IN_STOCK.check(body.get("inStock"), &mut errors),
        };

        errors.into_result().map(|()| input)
    }
}

impl ItemId {
    /// Parse a path identifier in canonical hyphenated UUID form.
    pub fn parse(raw: &str) -> Result<Self, ValidationErrors> {
        if raw.len() == 36 {
            if let Ok(uuid) = Uuid::try_parse(raw) {
                return Ok(Self(uuid));
            }
        }
        Err(ValidationErrors::single("id", INVALID_ID_MESSAGE, Constraint::Format))
    }
}

impl ListQuery {
    /// Parse raw query-string parameters.
    ///
    /// `page` and `limit` default to 1 and 10; empty `category` or `search`
    /// values are treated as absent. Unknown parameters are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let page = PAGE.check(params.get("page").map(String::as_str), &mut errors);
        let limit = LIMIT.check(params.get("limit").map(String::as_str), &mut errors);
        let non_empty = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();

        let query = Self {
            page,
            limit,
            category: non_empty("category"),
            search: non_empty("search"),
        };

        errors.into_result().map(|()| query)
    }
}
