use crate::enums::{Category, PaymentMethod, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single retail order, as read from one row of an export.
///
/// Orders are identified by `id` alone: two orders with the same id compare equal
/// regardless of their other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub product: String,
    pub category: Category,
    pub price: f64,
    pub quantity: u32,
    /// Stored as given by the source; usually close to `price * quantity`.
    pub total_sales: f64,
    pub customer_name: String,
    pub customer_location: String,
    pub payment_method: PaymentMethod,
    pub status: Status,
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn order(id: &str, customer: &str, total_sales: f64) -> Order {
        Order {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            product: "Laptop".to_string(),
            category: Category::Electronics,
            price: 800.0,
            quantity: 1,
            total_sales,
            customer_name: customer.to_string(),
            customer_location: "Denver".to_string(),
            payment_method: PaymentMethod::CreditCard,
            status: Status::Completed,
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        assert_eq!(order("ORD0001", "Emma Clark", 800.0), order("ORD0001", "Olivia Wilson", 5.0));
        assert_ne!(order("ORD0001", "Emma Clark", 800.0), order("ORD0002", "Emma Clark", 800.0));
    }

    #[test]
    fn colliding_ids_deduplicate_in_sets() {
        let set: HashSet<Order> = [
            order("ORD0001", "Emma Clark", 800.0),
            order("ORD0001", "Jane Smith", 10.0),
            order("ORD0002", "Emma Clark", 800.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_enums_as_canonical_tokens() {
        let json = serde_json::to_value(order("ORD0001", "Emma Clark", 800.0)).unwrap();
        assert_eq!(json["category"], "ELECTRONICS");
        assert_eq!(json["payment_method"], "CREDIT_CARD");
        assert_eq!(json["date"], "2025-03-14");
    }
}
