use chrono::NaiveDate;
use core_types::{Category, PaymentMethod, Status};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A date paired with the number of orders placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub orders: u64,
}

/// The answers to every query, computed once over the same snapshot.
///
/// This is what the CLI renders, either as tables or as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub busiest_date: Option<DateCount>, // None for an empty data set
    pub top_products: Vec<String>,
    pub revenue_by_category: BTreeMap<Category, f64>,
    pub suspicious_customers: BTreeSet<String>,
    pub payment_method_by_category: BTreeMap<Category, PaymentMethod>,
    pub top_location: Option<String>, // None for an empty data set
    pub orders_by_category_and_status: BTreeMap<Category, BTreeMap<Status, u64>>,
}

impl OrderReport {
    /// Creates a report describing an empty data set.
    pub fn new() -> Self {
        Self {
            total_orders: 0,
            total_revenue: 0.0,
            busiest_date: None,
            top_products: Vec::new(),
            revenue_by_category: BTreeMap::new(),
            suspicious_customers: BTreeSet::new(),
            payment_method_by_category: BTreeMap::new(),
            top_location: None,
            orders_by_category_and_status: BTreeMap::new(),
        }
    }
}

impl Default for OrderReport {
    fn default() -> Self {
        Self::new()
    }
}
