//! Shared regex patterns for the extraction rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of two or more whitespace characters separate columns in
    /// tabular cargo rows.
    pub static ref COLUMN_SPLIT: Regex = Regex::new(r"\s{2,}").unwrap();

    /// Inline cargo rows of the form "Item PALLET01 Qty 5".
    pub static ref ITEM_ROW: Regex = Regex::new(r"(?i)^item\s+(\w+)\s+qty\s+(\d+)").unwrap();

    /// Shape of generated order references.
    pub static ref GENERATED_REFERENCE: Regex = Regex::new(r"^ORD-[A-Z0-9]{6}$").unwrap();
}
