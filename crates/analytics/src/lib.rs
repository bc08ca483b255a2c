//! # Order Analytics Engine
//!
//! This crate answers a fixed set of analytical questions over a collection of retail
//! orders: who bought what, when, where, how they paid, and which customers look
//! suspicious.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files or
//!   parsing. It depends only on `core-types` (Layer 0).
//! - **Snapshot Semantics:** The `AnalyticsEngine` owns its own copy of the orders it was
//!   built from. Every query is a fresh scan of that copy; nothing is cached.
//! - **Deterministic Ranking:** Every "most frequent" query ranks by count descending and
//!   breaks ties on the ascending key, so repeated runs over the same input agree.
//!
//! ## Public API
//!
//! - `OrderAnalyzer`: The trait naming every query.
//! - `AnalyticsEngine`: The in-memory implementation.
//! - `OrderReport`: A serializable bundle of every query's answer.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, SUSPICIOUS_CANCELLED_ORDERS, SUSPICIOUS_TOTAL_SALES};
pub use error::AnalyticsError;
pub use report::{DateCount, OrderReport};

use chrono::NaiveDate;
use core_types::{Category, Order, PaymentMethod, Status};
use std::collections::{BTreeMap, BTreeSet};

/// The read-only queries available over a collection of orders.
///
/// Implementations must be pure: calling any query never changes the answer of another,
/// and calling the same query twice yields the same result.
pub trait OrderAnalyzer {
    /// Every order, in the order it was supplied.
    fn all_orders(&self) -> &[Order];

    /// Orders whose customer name equals `customer` exactly, in original order.
    ///
    /// Fails with `AnalyticsError::InvalidArgument` if `customer` is blank.
    fn orders_by_customer(&self, customer: &str) -> Result<Vec<&Order>, AnalyticsError>;

    /// The date with the most orders and its count. Ties go to the earliest date.
    /// `None` when there are no orders.
    fn date_with_most_orders(&self) -> Option<(NaiveDate, u64)>;

    /// The `n` most frequently ordered products, ranked by order count and then by name.
    fn top_n_most_ordered_products(&self, n: usize) -> Vec<String>;

    /// Summed `total_sales` per category. Categories without orders are absent.
    fn revenue_by_category(&self) -> BTreeMap<Category, f64>;

    /// Customers with more than `SUSPICIOUS_CANCELLED_ORDERS` cancelled orders, each worth
    /// less than `SUSPICIOUS_TOTAL_SALES`.
    fn suspicious_customers(&self) -> BTreeSet<String>;

    /// The most used payment method in each category that has orders. Ties go to the
    /// payment method whose canonical name sorts first.
    fn most_used_payment_method_for_category(&self) -> BTreeMap<Category, PaymentMethod>;

    /// The customer location with the most orders. Ties go to the name that sorts first.
    /// `None` when there are no orders.
    fn location_with_most_orders(&self) -> Option<String>;

    /// Order counts per category, then per status. Only combinations that occur appear.
    fn group_by_category_and_status(&self) -> BTreeMap<Category, BTreeMap<Status, u64>>;
}
