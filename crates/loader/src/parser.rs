use crate::error::LoadError;
use chrono::NaiveDate;
use core_types::{CoreError, Order};
use std::str::FromStr;

/// Number of comma-separated fields in every order row.
pub const FIELD_COUNT: usize = 11;

/// Day-month-two-digit-year, e.g. `14-03-25`. Every field is exactly two digits and the
/// year always falls in 2000-2099.
pub const DATE_FORMAT: &str = "dd-MM-yy";

const CENTURY: i32 = 2000;

const ID: usize = 0;
const DATE: usize = 1;
const PRODUCT: usize = 2;
const CATEGORY: usize = 3;
const PRICE: usize = 4;
const QUANTITY: usize = 5;
const TOTAL_SALES: usize = 6;
const CUSTOMER_NAME: usize = 7;
const CUSTOMER_LOCATION: usize = 8;
const PAYMENT_METHOD: usize = 9;
const STATUS: usize = 10;

/// Maps one data row onto an `Order`.
///
/// `line` is the 1-based position of the row in its source and is only used for error
/// reporting. Text fields are kept verbatim; numeric and date fields are trimmed first.
pub fn parse_order_line(raw: &str, line: usize) -> Result<Order, LoadError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let customer_name = fields[CUSTOMER_NAME];
    if customer_name.trim().is_empty() {
        return Err(invalid(line, "customer name", customer_name, "must not be blank"));
    }

    Ok(Order {
        id: fields[ID].to_string(),
        date: parse_date(fields[DATE], line)?,
        product: fields[PRODUCT].to_string(),
        category: parse_enum(fields[CATEGORY], line)?,
        price: parse_amount(fields[PRICE], "price", line, true)?,
        quantity: parse_quantity(fields[QUANTITY], line)?,
        total_sales: parse_amount(fields[TOTAL_SALES], "total sales", line, false)?,
        customer_name: customer_name.to_string(),
        customer_location: fields[CUSTOMER_LOCATION].to_string(),
        payment_method: parse_enum(fields[PAYMENT_METHOD], line)?,
        status: parse_enum(fields[STATUS], line)?,
    })
}

fn invalid(line: usize, field: &'static str, value: &str, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_date(raw: &str, line: usize) -> Result<NaiveDate, LoadError> {
    let text = raw.trim();
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 8
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return Err(invalid(line, "date", raw, format!("expected {DATE_FORMAT}")));
    }

    let two_digits =
        |at: usize| u32::from(bytes[at] - b'0') * 10 + u32::from(bytes[at + 1] - b'0');
    let (day, month, year) = (two_digits(0), two_digits(3), two_digits(6));

    NaiveDate::from_ymd_opt(CENTURY + year as i32, month, day)
        .ok_or_else(|| invalid(line, "date", raw, "no such calendar date"))
}

fn parse_enum<T>(raw: &str, line: usize) -> Result<T, LoadError>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>()
        .map_err(|source| LoadError::Domain { line, source })
}

fn parse_amount(
    raw: &str,
    field: &'static str,
    line: usize,
    non_negative: bool,
) -> Result<f64, LoadError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(line, field, raw, e.to_string()))?;

    if !value.is_finite() {
        return Err(invalid(line, field, raw, "must be a finite number"));
    }
    if non_negative && value < 0.0 {
        return Err(invalid(line, field, raw, "must not be negative"));
    }
    Ok(value)
}

fn parse_quantity(raw: &str, line: usize) -> Result<u32, LoadError> {
    let quantity = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid(line, "quantity", raw, e.to_string()))?;

    if quantity == 0 {
        return Err(invalid(line, "quantity", raw, "must be positive"));
    }
    Ok(quantity)
}
