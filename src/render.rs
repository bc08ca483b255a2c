//! Writes query results to stdout, either as `comfy-table` tables or as JSON.

use analytics::OrderReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use configuration::OutputFormat;
use core_types::{Category, Order};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    table
}

pub fn report(report: &OrderReport, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }

    let mut summary = new_table(&["Metric", "Value"]);
    summary.add_row(vec!["Orders".to_string(), report.total_orders.to_string()]);
    summary.add_row(vec![
        "Revenue".to_string(),
        format!("{:.2}", report.total_revenue),
    ]);
    summary.add_row(vec![
        "Busiest date".to_string(),
        report
            .busiest_date
            .map(|d| format!("{} ({} orders)", d.date, d.orders))
            .unwrap_or_else(|| "-".to_string()),
    ]);
    summary.add_row(vec![
        "Busiest location".to_string(),
        report.top_location.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    println!("{summary}");

    let mut products = new_table(&["Rank", "Product"]);
    for (rank, product) in report.top_products.iter().enumerate() {
        products.add_row(vec![(rank + 1).to_string(), product.clone()]);
    }
    println!("{products}");

    let mut categories = new_table(&["Category", "Revenue", "Preferred payment", "Orders by status"]);
    for category in Category::ALL {
        let Some(revenue) = report.revenue_by_category.get(&category) else {
            continue;
        };
        let payment = report
            .payment_method_by_category
            .get(&category)
            .map(|m| m.to_string())
            .unwrap_or_default();
        let statuses = report
            .orders_by_category_and_status
            .get(&category)
            .map(|by_status| {
                by_status
                    .iter()
                    .map(|(status, count)| format!("{status}: {count}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        categories.add_row(vec![
            category.to_string(),
            format!("{revenue:.2}"),
            payment,
            statuses,
        ]);
    }
    println!("{categories}");

    if report.suspicious_customers.is_empty() {
        println!("No suspicious customers.");
    } else {
        let mut suspicious = new_table(&["Suspicious customer"]);
        for customer in &report.suspicious_customers {
            suspicious.add_row(vec![customer.clone()]);
        }
        println!("{suspicious}");
    }

    Ok(())
}

pub fn orders(orders: &[&Order], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(orders);
    }

    let mut table = new_table(&[
        "ID", "Date", "Product", "Category", "Qty", "Total", "Location", "Payment", "Status",
    ]);
    for order in orders {
        table.add_row(vec![
            order.id.clone(),
            order.date.to_string(),
            order.product.clone(),
            order.category.to_string(),
            order.quantity.to_string(),
            format!("{:.2}", order.total_sales),
            order.customer_location.clone(),
            order.payment_method.to_string(),
            order.status.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn products(products: &[String], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(products);
    }

    let mut table = new_table(&["Rank", "Product"]);
    for (rank, product) in products.iter().enumerate() {
        table.add_row(vec![(rank + 1).to_string(), product.clone()]);
    }
    println!("{table}");
    Ok(())
}
