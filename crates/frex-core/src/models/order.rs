//! Order data models matching the downstream order-intake schema.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A complete transport order assembled from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Names of source attachments, in received order.
    pub attachment_filenames: Vec<String>,

    /// The ordering party.
    pub customer: Customer,

    /// Pickup stops. The heuristic path yields exactly one.
    pub loading_locations: Vec<LocationRecord>,

    /// Delivery stops. The heuristic path yields exactly one.
    pub destination_locations: Vec<LocationRecord>,

    /// Cargo rows. Never empty - a synthetic default row stands in when
    /// the document yields nothing.
    pub cargos: Vec<CargoRecord>,

    /// Document reference, generated when the document yields none.
    pub order_reference: String,

    /// Agreed freight price.
    pub freight_price: f64,

    /// Currency of the freight price.
    pub freight_currency: String,

    /// Truck/trailer registration numbers, free text.
    pub transport_numbers: String,

    /// Free-text remarks.
    pub comment: String,

    /// Delivery terms.
    pub incoterms: String,
}

/// The ordering party and which side of the transport it is on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub side: CustomerSide,
    pub details: CompanyRecord,
}

/// Which side of the transport the customer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSide {
    Sender,
    Receiver,
}

/// A company block. Absent fields are empty strings, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRecord {
    pub company: String,
    pub company_code: String,
    pub vat_code: String,
    pub email: String,
    pub contact_person: String,
    pub street_address: String,
    pub title: String,
    /// At least two characters; "NA" when unknown.
    pub city: String,
    /// ISO-3166 alpha-2, or empty when unresolvable.
    pub country: String,
    pub postal_code: String,
    pub comment: String,
}

/// One stop with its time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub company_address: CompanyRecord,
    pub time: TimeWindow,
}

/// Start and end of a stop's time window. Serializes as ISO-8601 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub datetime_from: DateTime<FixedOffset>,
    /// Never earlier than `datetime_from`.
    pub datetime_to: DateTime<FixedOffset>,
}

/// One cargo row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CargoRecord {
    pub title: String,
    pub package_count: u32,
    pub package_type: String,
    pub number: String,
    #[serde(rename = "type")]
    pub cargo_type: String,
    pub value: f64,
    pub currency: String,
    pub pkg_width: f64,
    pub pkg_length: f64,
    pub pkg_height: f64,
    pub ldm: f64,
    pub volume: f64,
    pub weight: f64,
    pub chargeable_weight: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub temperature_mode: String,
    pub adr: bool,
    pub extra_lift: bool,
    pub palletized: bool,
    pub manual_load: bool,
    pub vehicle_make: String,
    pub vehicle_model: String,
}

impl OrderRecord {
    /// Check the record against the sink schema's structural invariants and
    /// return any issues found. An empty list means the record is safe to
    /// hand off.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.order_reference.is_empty() {
            issues.push("missing order reference".to_string());
        }
        if self.cargos.is_empty() {
            issues.push("no cargo rows".to_string());
        }

        company_issues("customer", &self.customer.details, &mut issues);
        for (label, locations) in [
            ("loading", &self.loading_locations),
            ("destination", &self.destination_locations),
        ] {
            for location in locations.iter() {
                company_issues(label, &location.company_address, &mut issues);
                if location.time.datetime_to < location.time.datetime_from {
                    issues.push(format!("{label} window ends before it starts"));
                }
            }
        }

        issues
    }
}

fn company_issues(label: &str, company: &CompanyRecord, issues: &mut Vec<String>) {
    if company.city.chars().count() < 2 {
        issues.push(format!("{label} city shorter than 2 characters"));
    }
    let country_len = company.country.chars().count();
    if country_len != 0 && country_len != 2 {
        issues.push(format!("{label} country is not an ISO-2 code"));
    }
}
