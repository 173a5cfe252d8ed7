use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::Paypal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn validate_payment_method(value: &str) -> Result<(), ValidationError> {
    PaymentMethod::from_str(value).map_err(|_| {
        let mut err = ValidationError::new("payment_method");
        err.message = Some("Payment method must be credit_card or paypal".into());
        err
    })?;
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Shipping address is required"))]
    #[schema(example = "1 Example Street, Springfield")]
    pub shipping_address: String,

    #[validate(custom(function = "validate_payment_method"))]
    #[schema(example = "credit_card")]
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_payment_methods() {
        assert_eq!(
            "credit_card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!("paypal".parse::<PaymentMethod>(), Ok(PaymentMethod::Paypal));
        assert!("bank_transfer".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn rejects_unknown_payment_method() {
        let req = CreateOrderRequest {
            shipping_address: "1 Example Street".into(),
            payment_method: "cash".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_shipping_address() {
        let req = CreateOrderRequest {
            shipping_address: "".into(),
            payment_method: "paypal".into(),
        };
        assert!(req.validate().is_err());
    }
}
