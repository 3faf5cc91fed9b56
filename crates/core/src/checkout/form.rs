//! Checkout form

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rustc_hash::FxHashMap;

use super::{CheckoutError, CheckoutField, FieldValue};

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Bank transfer
    Transfer,

    /// Cash on delivery
    CashOnDelivery,

    /// E-wallet
    EWallet,
}

impl PaymentMethod {
    /// Every offered method, in display order.
    pub const ALL: [PaymentMethod; 3] = [Self::Transfer, Self::CashOnDelivery, Self::EWallet];

    /// Identifier submitted by the form.
    pub fn id(self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::CashOnDelivery => "cod",
            Self::EWallet => "ewallet",
        }
    }

    /// Customer-facing name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Bank transfer",
            Self::CashOnDelivery => "Cash on delivery",
            Self::EWallet => "E-wallet",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.id() == s.trim())
            .ok_or_else(|| CheckoutError::UnknownPaymentMethod(s.to_string()))
    }
}

/// Raw checkout form submission.
///
/// The base fields are fixed; anything the admin configured arrives in `custom`, keyed by
/// field name.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    /// Recipient name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Optional order notes
    pub notes: Option<String>,

    /// Payment method identifier, e.g. `cod`
    pub payment_method: String,

    /// Raw values for admin-declared fields, keyed by field name
    pub custom: BTreeMap<String, String>,
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckout {
    /// Trimmed recipient name
    pub name: String,

    /// Trimmed phone number
    pub phone: String,

    /// Trimmed delivery address
    pub address: String,

    /// Notes, if any were given
    pub notes: Option<String>,

    /// Chosen payment method
    pub payment_method: PaymentMethod,

    /// Parsed custom field values, keyed by field name
    pub custom: BTreeMap<String, FieldValue>,
}

impl CheckoutForm {
    /// Validate the form against the declared custom `fields`.
    ///
    /// Blank values count as absent. Inactive fields are treated as undeclared.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckoutError`] found, base fields first.
    pub fn validate(&self, fields: &[CheckoutField]) -> Result<ValidatedCheckout, CheckoutError> {
        let name = required(&self.name, "name")?;
        let phone = required(&self.phone, "phone")?;
        let address = required(&self.address, "address")?;
        let payment_method =
            required(&self.payment_method, "payment_method")?.parse::<PaymentMethod>()?;

        let declared: FxHashMap<&str, &CheckoutField> = fields
            .iter()
            .filter(|field| field.is_active)
            .map(|field| (field.name.as_str(), field))
            .collect();

        if let Some(undeclared) = self
            .custom
            .keys()
            .find(|key| !declared.contains_key(key.as_str()))
        {
            return Err(CheckoutError::UndeclaredField(undeclared.clone()));
        }

        let mut ordered: Vec<&CheckoutField> = declared.into_values().collect();
        ordered.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));

        let mut custom = BTreeMap::new();

        for field in ordered {
            let raw = self
                .custom
                .get(&field.name)
                .map(String::as_str)
                .filter(|value| !value.trim().is_empty());

            match raw {
                Some(raw) => {
                    custom.insert(field.name.clone(), field.parse(raw)?);
                }
                None if field.required => {
                    return Err(CheckoutError::MissingCustomField(field.name.clone()));
                }
                None => {}
            }
        }

        Ok(ValidatedCheckout {
            name,
            phone,
            address,
            notes: self
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            payment_method,
            custom,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, CheckoutError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(CheckoutError::MissingField(field));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::checkout::FieldType;

    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Siti Aminah".to_string(),
            phone: "08123456789".to_string(),
            address: "Jl. Merdeka No. 1".to_string(),
            notes: Some("  ".to_string()),
            payment_method: "cod".to_string(),
            custom: BTreeMap::new(),
        }
    }

    fn schema() -> Vec<CheckoutField> {
        vec![
            CheckoutField::new("delivery_date", "Delivery date", FieldType::Date).required(),
            CheckoutField::new("note_to_driver", "Note to driver", FieldType::Text),
            CheckoutField {
                is_active: false,
                ..CheckoutField::new("legacy", "Legacy", FieldType::Text)
            },
        ]
    }

    #[test]
    fn accepts_complete_form() -> TestResult {
        let mut form = form();
        form.custom
            .insert("delivery_date".to_string(), "2025-06-01".to_string());

        let validated = form.validate(&schema())?;

        assert_eq!(validated.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(validated.notes, None);
        assert_eq!(
            validated.custom.get("delivery_date"),
            Some(&FieldValue::Date(date(2025, 6, 1)))
        );
        assert!(!validated.custom.contains_key("note_to_driver"));

        Ok(())
    }

    #[test]
    fn blank_base_field_is_reported_first() {
        let form = CheckoutForm {
            address: " ".to_string(),
            payment_method: String::new(),
            ..form()
        };

        assert_eq!(
            form.validate(&[]),
            Err(CheckoutError::MissingField("address"))
        );
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let form = CheckoutForm {
            payment_method: "crypto".to_string(),
            ..form()
        };

        assert_eq!(
            form.validate(&[]),
            Err(CheckoutError::UnknownPaymentMethod("crypto".to_string()))
        );
    }

    #[test]
    fn missing_required_custom_field_is_rejected() {
        assert_eq!(
            form().validate(&schema()),
            Err(CheckoutError::MissingCustomField("delivery_date".to_string()))
        );
    }

    #[test]
    fn values_for_inactive_fields_are_rejected() {
        let mut form = form();
        form.custom
            .insert("delivery_date".to_string(), "2025-06-01".to_string());
        form.custom.insert("legacy".to_string(), "x".to_string());

        assert_eq!(
            form.validate(&schema()),
            Err(CheckoutError::UndeclaredField("legacy".to_string()))
        );
    }

    #[test]
    fn payment_methods_round_trip_through_ids() -> TestResult {
        for method in PaymentMethod::ALL {
            assert_eq!(method.id().parse::<PaymentMethod>()?, method);
        }

        Ok(())
    }
}
