use crate::OrderAnalyzer;
use crate::error::AnalyticsError;
use crate::report::{DateCount, OrderReport};
use chrono::NaiveDate;
use core_types::{Category, Order, PaymentMethod, Status};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// Orders worth less than this, when cancelled, count towards a customer being suspicious.
pub const SUSPICIOUS_TOTAL_SALES: f64 = 100.0;

/// A customer needs strictly more cancelled low-value orders than this to be suspicious.
pub const SUSPICIOUS_CANCELLED_ORDERS: u64 = 3;

/// An in-memory analyzer over a fixed snapshot of orders.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    orders: Vec<Order>,
}

impl AnalyticsEngine {
    /// Builds an engine over its own copy of `orders`.
    ///
    /// Passing a slice clones it; passing a `Vec` hands it over. Either way the engine
    /// never observes later changes to the caller's collection.
    pub fn new(orders: impl Into<Vec<Order>>) -> Self {
        let orders = orders.into();
        tracing::info!("AnalyticsEngine: built over {} orders", orders.len());
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Runs every query once and gathers the answers into a single report.
    pub fn summarize(&self, top_n: usize) -> OrderReport {
        let mut report = OrderReport::new();

        if self.orders.is_empty() {
            return report;
        }

        report.total_orders = self.orders.len();
        report.total_revenue = self
            .orders
            .iter()
            .fold(CompensatedSum::default(), |acc, o| acc.add(o.total_sales))
            .value();
        report.busiest_date = self
            .date_with_most_orders()
            .map(|(date, orders)| DateCount { date, orders });
        report.top_products = self.top_n_most_ordered_products(top_n);
        report.revenue_by_category = self.revenue_by_category();
        report.suspicious_customers = self.suspicious_customers();
        report.payment_method_by_category = self.most_used_payment_method_for_category();
        report.top_location = self.location_with_most_orders();
        report.orders_by_category_and_status = self.group_by_category_and_status();

        report
    }
}

impl OrderAnalyzer for AnalyticsEngine {
    fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    fn orders_by_customer(&self, customer: &str) -> Result<Vec<&Order>, AnalyticsError> {
        if customer.trim().is_empty() {
            return Err(AnalyticsError::InvalidArgument(
                "customer cannot be blank".to_string(),
            ));
        }

        let matches: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.customer_name == customer)
            .collect();
        tracing::debug!("orders_by_customer: {} orders for '{}'", matches.len(), customer);
        Ok(matches)
    }

    fn date_with_most_orders(&self) -> Option<(NaiveDate, u64)> {
        let counts = count_by(&self.orders, |o| o.date);
        let best = rank_by_count(counts, |a, b| a.cmp(b)).into_iter().next();
        tracing::debug!("date_with_most_orders: {:?}", best);
        best
    }

    fn top_n_most_ordered_products(&self, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }

        let counts = count_by(&self.orders, |o| o.product.as_str());
        let top: Vec<String> = rank_by_count(counts, |a, b| a.cmp(b))
            .into_iter()
            .take(n)
            .map(|(product, _)| product.to_string())
            .collect();
        tracing::debug!("top_n_most_ordered_products({}): {:?}", n, top);
        top
    }

    fn revenue_by_category(&self) -> BTreeMap<Category, f64> {
        let mut revenue: BTreeMap<Category, CompensatedSum> = BTreeMap::new();
        for order in &self.orders {
            let sum = revenue.entry(order.category).or_default();
            *sum = sum.add(order.total_sales);
        }
        revenue
            .into_iter()
            .map(|(category, sum)| (category, sum.value()))
            .collect()
    }

    fn suspicious_customers(&self) -> BTreeSet<String> {
        let low_value_cancellations: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.status == Status::Cancelled)
            .filter(|o| o.total_sales < SUSPICIOUS_TOTAL_SALES)
            .collect();

        let suspicious: BTreeSet<String> = count_by(low_value_cancellations, |o| {
            o.customer_name.as_str()
        })
        .into_iter()
        .filter(|&(_, count)| count > SUSPICIOUS_CANCELLED_ORDERS)
        .map(|(customer, _)| customer.to_string())
        .collect();

        if !suspicious.is_empty() {
            tracing::debug!("suspicious_customers: flagged {:?}", suspicious);
        }
        suspicious
    }

    fn most_used_payment_method_for_category(&self) -> BTreeMap<Category, PaymentMethod> {
        let mut per_category: BTreeMap<Category, HashMap<PaymentMethod, u64>> = BTreeMap::new();
        for order in &self.orders {
            *per_category
                .entry(order.category)
                .or_default()
                .entry(order.payment_method)
                .or_insert(0) += 1;
        }

        per_category
            .into_iter()
            .filter_map(|(category, counts)| {
                rank_by_count(counts, |a, b| a.as_str().cmp(b.as_str()))
                    .into_iter()
                    .next()
                    .map(|(method, _)| (category, method))
            })
            .collect()
    }

    fn location_with_most_orders(&self) -> Option<String> {
        let counts = count_by(&self.orders, |o| o.customer_location.as_str());
        rank_by_count(counts, |a, b| a.cmp(b))
            .into_iter()
            .next()
            .map(|(location, _)| location.to_string())
    }

    fn group_by_category_and_status(&self) -> BTreeMap<Category, BTreeMap<Status, u64>> {
        let mut groups: BTreeMap<Category, BTreeMap<Status, u64>> = BTreeMap::new();
        for order in &self.orders {
            *groups
                .entry(order.category)
                .or_default()
                .entry(order.status)
                .or_insert(0) += 1;
        }
        groups
    }
}

/// Kahan summation: carries the low-order bits lost by each addition into the next one.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(self, value: f64) -> Self {
        let adjusted = value - self.compensation;
        let sum = self.sum + adjusted;
        Self {
            sum,
            compensation: (sum - self.sum) - adjusted,
        }
    }

    fn value(self) -> f64 {
        self.sum - self.compensation
    }
}

/// Counts orders per key.
fn count_by<'a, I, K, F>(orders: I, key: F) -> HashMap<K, u64>
where
    I: IntoIterator<Item = &'a Order>,
    K: Eq + Hash,
    F: Fn(&'a Order) -> K,
{
    let mut counts = HashMap::new();
    for order in orders {
        *counts.entry(key(order)).or_insert(0) += 1;
    }
    counts
}

/// Orders `(key, count)` pairs by count descending, then by `tie_break` ascending.
///
/// The comparator is total over distinct keys, so the result does not depend on the
/// iteration order of `counts`.
fn rank_by_count<K, F>(counts: HashMap<K, u64>, tie_break: F) -> Vec<(K, u64)>
where
    F: Fn(&K, &K) -> Ordering,
{
    let mut ranked: Vec<(K, u64)> = counts.into_iter().collect();
    ranked.sort_by(|(key_a, count_a), (key_b, count_b)| {
        count_b.cmp(count_a).then_with(|| tie_break(key_a, key_b))
    });
    ranked
}
