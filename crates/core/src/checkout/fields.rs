//! Custom checkout fields

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::CheckoutError;

/// Input type of a custom checkout field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldType {
    /// Single-line text
    Text,

    /// Multi-line text
    Textarea,

    /// One of a fixed set of options
    Select {
        /// Allowed values
        options: Vec<String>,
    },

    /// Calendar date, `YYYY-MM-DD`
    Date,

    /// Time of day, `HH:MM`
    Time,
}

/// An admin-declared field shown on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutField {
    /// Key the value is submitted under
    pub name: String,

    /// Label shown to the customer
    pub label: String,

    /// Input type
    #[serde(flatten)]
    pub field_type: FieldType,

    /// Whether a value must be supplied
    #[serde(default)]
    pub required: bool,

    /// Display ordering, ascending
    #[serde(default)]
    pub sort_order: u32,

    /// Inactive fields are not shown and accept no value
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A custom field value after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text
    Text(String),

    /// Chosen select option
    Choice(String),

    /// Parsed date
    Date(Date),

    /// Parsed time
    Time(Time),
}

impl CheckoutField {
    /// Declare an optional, active field.
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            sort_order: 0,
            is_active: true,
        }
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the display position.
    #[must_use]
    pub fn sort_order(mut self, sort_order: u32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Parse a raw submitted value according to the field type.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not fit the field type.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, CheckoutError> {
        let value = raw.trim();

        match &self.field_type {
            FieldType::Text => Ok(FieldValue::Text(value.to_string())),
            FieldType::Textarea => Ok(FieldValue::Text(raw.to_string())),
            FieldType::Select { options } => options
                .iter()
                .find(|option| option.as_str() == value)
                .map(|option| FieldValue::Choice(option.clone()))
                .ok_or_else(|| CheckoutError::InvalidOption {
                    field: self.name.clone(),
                    value: value.to_string(),
                }),
            FieldType::Date => {
                value
                    .parse::<Date>()
                    .map(FieldValue::Date)
                    .map_err(|_err| CheckoutError::InvalidDate {
                        field: self.name.clone(),
                        value: value.to_string(),
                    })
            }
            FieldType::Time => {
                value
                    .parse::<Time>()
                    .map(FieldValue::Time)
                    .map_err(|_err| CheckoutError::InvalidTime {
                        field: self.name.clone(),
                        value: value.to_string(),
                    })
            }
        }
    }

    /// Fields the storefront asks for out of the box.
    pub fn standard_fields() -> Vec<CheckoutField> {
        vec![
            CheckoutField::new("delivery_date", "Delivery date", FieldType::Date).sort_order(1),
            CheckoutField::new("delivery_time", "Delivery time", FieldType::Time).sort_order(2),
            CheckoutField::new(
                "cutlery",
                "Include cutlery",
                FieldType::Select {
                    options: vec!["yes".to_string(), "no".to_string()],
                },
            )
            .sort_order(3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_dates_and_times() -> TestResult {
        let delivery_date = CheckoutField::new("d", "Date", FieldType::Date);
        let delivery_time = CheckoutField::new("t", "Time", FieldType::Time);

        assert_eq!(
            delivery_date.parse("2025-03-14")?,
            FieldValue::Date(date(2025, 3, 14))
        );
        assert_eq!(
            delivery_time.parse("18:30")?,
            FieldValue::Time(time(18, 30, 0, 0))
        );

        Ok(())
    }

    #[test]
    fn rejects_impossible_dates() {
        let field = CheckoutField::new("d", "Date", FieldType::Date);

        assert!(matches!(
            field.parse("2025-02-30"),
            Err(CheckoutError::InvalidDate { .. })
        ));
    }

    #[test]
    fn select_accepts_only_declared_options() -> TestResult {
        let field = CheckoutField::new(
            "size",
            "Size",
            FieldType::Select {
                options: vec!["small".to_string(), "large".to_string()],
            },
        );

        assert_eq!(field.parse("large")?, FieldValue::Choice("large".to_string()));
        assert!(matches!(
            field.parse("medium"),
            Err(CheckoutError::InvalidOption { .. })
        ));

        Ok(())
    }

    #[test]
    fn schema_deserializes_from_yaml() -> TestResult {
        let fields: Vec<CheckoutField> = serde_norway::from_str(
            r"
- name: gift_wrap
  label: Gift wrap
  type: select
  options: [none, paper, box]
  required: true
- name: message
  label: Card message
  type: textarea
",
        )?;

        assert_eq!(fields.len(), 2);
        assert!(fields.first().is_some_and(|field| field.required));
        assert_eq!(
            fields.get(1).map(|field| &field.field_type),
            Some(&FieldType::Textarea)
        );

        Ok(())
    }
}
