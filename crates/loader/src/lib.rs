//! # Order Loader
//!
//! Turns a comma-separated order export into a `Vec<Order>`.
//!
//! The first line is a header and is always discarded. Every following non-blank line
//! must hold exactly eleven fields, in this order:
//!
//! `id, date (dd-MM-yy), product, category, price, quantity, total_sales,
//!  customer_name, customer_location, payment_method, status`
//!
//! Fields are split naively on `,`; quoting is not supported. A single malformed row
//! aborts the whole load and no orders are returned.

pub mod error;
pub mod parser;

pub use error::LoadError;
pub use parser::{DATE_FORMAT, FIELD_COUNT, parse_order_line};

use core_types::Order;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads every order from `reader`, skipping the header and blank lines.
pub fn load_orders<R: BufRead>(reader: R) -> Result<Vec<Order>, LoadError> {
    let mut lines = reader.lines();
    let mut orders = Vec::new();

    // Header.
    if lines.next().transpose()?.is_none() {
        tracing::debug!("Order source is empty");
        return Ok(orders);
    }

    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 2;
        let order = parse_order_line(&line, line_no).inspect_err(|e| {
            tracing::warn!("Rejecting order export: {}", e);
        })?;
        orders.push(order);
    }

    tracing::info!("Loaded {} orders", orders.len());
    Ok(orders)
}

/// Parses orders from in-memory text.
pub fn parse_orders(text: &str) -> Result<Vec<Order>, LoadError> {
    load_orders(text.as_bytes())
}

/// Opens `path` and loads every order in it.
///
/// An empty path is rejected as an invalid argument before any I/O is attempted.
pub fn load_orders_from_path(path: impl AsRef<Path>) -> Result<Vec<Order>, LoadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoadError::InvalidArgument(
            "order source path may not be empty".to_string(),
        ));
    }

    tracing::info!("Loading orders from {}", path.display());
    let file = File::open(path)?;
    load_orders(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    const HEADER: &str = "Order ID,Date,Product,Category,Price,Quantity,Total Sales,Customer Name,Customer Location,Payment Method,Status";

    #[test]
    fn empty_source_yields_no_orders() {
        assert!(parse_orders("").unwrap().is_empty());
        assert!(parse_orders(HEADER).unwrap().is_empty());
    }

    #[test]
    fn header_is_discarded_and_blank_lines_skipped() {
        let text = format!(
            "{HEADER}\n\nORD0001,14-03-25,Running Shoes,Footwear,60,3,180,Emma Clark,New York,Debit Card,Cancelled\n   \nORD0002,20-03-25,Headphones,Electronics,100,4,400,Emily Johnson,San Francisco,Debit Card,Pending\n"
        );
        let orders = parse_orders(&text).unwrap();
        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD0001", "ORD0002"]);
    }

    #[test]
    fn bad_row_aborts_the_whole_load() {
        let text = format!(
            "{HEADER}\nORD0001,14-03-25,Running Shoes,Footwear,60,3,180,Emma Clark,New York,Debit Card,Cancelled\nORD0002,20-03-25,Headphones,Groceries,100,4,400,Emily Johnson,San Francisco,Debit Card,Pending\n"
        );
        let err = parse_orders(&text).unwrap_err();
        assert!(matches!(err, LoadError::Domain { line: 3, .. }), "{err:?}");
    }

    #[test]
    fn empty_path_is_an_invalid_argument() {
        let err = load_orders_from_path("").unwrap_err();
        assert!(matches!(err, LoadError::InvalidArgument(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_orders_from_path("/definitely/not/here/orders.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_failure_is_wrapped_as_io() {
        let err = load_orders(io::BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert_eq!(err.line(), None);
    }
}
