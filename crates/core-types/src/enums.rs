use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brings a raw token into canonical enum form: surrounding whitespace trimmed,
/// inner spaces replaced with underscores, uppercased. `" Home Appliances"` becomes
/// `"HOME_APPLIANCES"`.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_uppercase()
}

/// The product category of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Clothing,
    Footwear,
    Books,
    HomeAppliances,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Footwear,
        Category::Books,
        Category::HomeAppliances,
    ];

    /// The canonical token, as it appears after normalization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Clothing => "CLOTHING",
            Category::Footwear => "FOOTWEAR",
            Category::Books => "BOOKS",
            Category::HomeAppliances => "HOME_APPLIANCES",
        }
    }
}

/// How the customer paid for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Paypal,
    CreditCard,
    DebitCard,
    AmazonPay,
    GiftCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Paypal,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::AmazonPay,
        PaymentMethod::GiftCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::AmazonPay => "AMAZON_PAY",
            PaymentMethod::GiftCard => "GIFT_CARD",
        }
    }
}

/// The fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Completed,
    Pending,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::Pending, Status::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::Pending => "PENDING",
            Status::Cancelled => "CANCELLED",
        }
    }
}

/// Looks up `raw` among `variants` by canonical token.
fn lookup<T: Copy>(
    kind: &'static str,
    raw: &str,
    variants: &[T],
    as_str: fn(&T) -> &'static str,
) -> Result<T, CoreError> {
    let token = normalize_token(raw);
    variants
        .iter()
        .copied()
        .find(|v| as_str(v) == token)
        .ok_or_else(|| CoreError::UnknownVariant {
            kind,
            value: raw.to_string(),
        })
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("category", s, &Category::ALL, Category::as_str)
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("payment method", s, &PaymentMethod::ALL, PaymentMethod::as_str)
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("status", s, &Status::ALL, Status::as_str)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_underscores_and_uppercases() {
        assert_eq!(normalize_token("  Home Appliances "), "HOME_APPLIANCES");
        assert_eq!(normalize_token("credit card"), "CREDIT_CARD");
    }

    #[test]
    fn parses_tokens_as_they_appear_in_exports() {
        assert_eq!("Home Appliances".parse::<Category>(), Ok(Category::HomeAppliances));
        assert_eq!(" Electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!("PayPal".parse::<PaymentMethod>(), Ok(PaymentMethod::Paypal));
        assert_eq!("Amazon Pay".parse::<PaymentMethod>(), Ok(PaymentMethod::AmazonPay));
        assert_eq!("cancelled".parse::<Status>(), Ok(Status::Cancelled));
    }

    #[test]
    fn unknown_token_is_rejected_with_its_kind() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownVariant {
                kind: "category",
                value: "Groceries".to_string()
            }
        );
        assert!("Bitcoin".parse::<PaymentMethod>().is_err());
        assert!("Shipped".parse::<Status>().is_err());
    }

    #[test]
    fn display_matches_canonical_token() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>(), Ok(method));
        }
        assert_eq!(Category::HomeAppliances.to_string(), "HOME_APPLIANCES");
    }
}
