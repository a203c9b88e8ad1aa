//! Company block extraction and normalization.

use crate::country::CountryResolver;
use crate::models::config::DefaultsConfig;
use crate::models::order::CompanyRecord;

use super::split_value;

/// Slots a matching line can fill, in priority order. Documents are assumed
/// to roughly follow this order; the first qualifying line wins each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Company,
    ContactPerson,
    StreetAddress,
    Country,
}

const FILL_ORDER: [Slot; 4] = [
    Slot::Company,
    Slot::ContactPerson,
    Slot::StreetAddress,
    Slot::Country,
];

/// Fills a company record from lines matching a set of role keywords.
pub struct CompanyExtractor<'a> {
    keywords: Vec<String>,
    defaults: &'a DefaultsConfig,
    resolver: &'a dyn CountryResolver,
}

impl<'a> CompanyExtractor<'a> {
    pub fn new(
        keywords: &[String],
        defaults: &'a DefaultsConfig,
        resolver: &'a dyn CountryResolver,
    ) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            defaults,
            resolver,
        }
    }

    /// Scan every line; each line matching a role keyword fills the next
    /// open slot. The result is always normalized.
    pub fn extract(&self, lines: &[String]) -> CompanyRecord {
        let mut company = CompanyRecord {
            city: self.defaults.city.clone(),
            country: self.defaults.country.clone(),
            ..CompanyRecord::default()
        };

        // Slots seeded with a non-empty default are never refilled.
        let mut filled = FILL_ORDER.map(|slot| !slot_value(&company, slot).is_empty());

        for line in lines {
            let lower = line.to_lowercase();
            if !self.keywords.iter().any(|kw| lower.contains(kw)) {
                continue;
            }

            let value = split_value(line);
            if value.is_empty() {
                continue;
            }

            let Some(index) = filled.iter().position(|taken| !taken) else {
                break;
            };
            filled[index] = true;

            match FILL_ORDER[index] {
                Slot::Company => company.company = value.to_string(),
                Slot::ContactPerson => company.contact_person = value.to_string(),
                Slot::StreetAddress => company.street_address = value.to_string(),
                // The slot is consumed even when resolution comes up empty.
                Slot::Country => {
                    company.country = self.resolver.resolve_iso(value).unwrap_or_default()
                }
            }
        }

        normalize_company(company)
    }
}

fn slot_value(company: &CompanyRecord, slot: Slot) -> &str {
    match slot {
        Slot::Company => &company.company,
        Slot::ContactPerson => &company.contact_person,
        Slot::StreetAddress => &company.street_address,
        Slot::Country => &company.country,
    }
}

/// Coerce a company record to schema-valid strings. Total and idempotent:
/// normalizing twice yields the same record as normalizing once.
pub fn normalize_company(mut company: CompanyRecord) -> CompanyRecord {
    for field in [
        &mut company.company,
        &mut company.company_code,
        &mut company.vat_code,
        &mut company.email,
        &mut company.contact_person,
        &mut company.street_address,
        &mut company.title,
        &mut company.city,
        &mut company.country,
        &mut company.postal_code,
        &mut company.comment,
    ] {
        *field = field.trim().to_string();
    }

    if company.city.chars().count() < 2 {
        company.city = "NA".to_string();
    }
    if company.country.chars().count() != 2 {
        company.country = String::new();
    }

    company
}

/// Convenience wrapper over [`CompanyExtractor`].
pub fn extract_company(
    lines: &[String],
    keywords: &[String],
    defaults: &DefaultsConfig,
    resolver: &dyn CountryResolver,
) -> CompanyRecord {
    CompanyExtractor::new(keywords, defaults, resolver).extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryTable;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn keywords(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fills_slots_in_document_order() {
        let defaults = DefaultsConfig::default();
        let doc = lines(&[
            "Shipper: Nordwind Logistics GmbH",
            "Shipper contact: Jana Keller",
            "Shipper address: Hafenstr. 12, Hamburg",
            "Unrelated line",
        ]);
        let company = extract_company(
            &doc,
            &keywords(&["shipper"]),
            &defaults,
            &CountryTable::new(),
        );

        assert_eq!(company.company, "Nordwind Logistics GmbH");
        assert_eq!(company.contact_person, "Jana Keller");
        assert_eq!(company.street_address, "Hafenstr. 12, Hamburg");
        // Stock country default stays in place.
        assert_eq!(company.country, "DE");
        assert_eq!(company.city, "NA");
    }

    #[test]
    fn empty_country_default_activates_the_resolver() {
        let defaults = DefaultsConfig {
            country: String::new(),
            ..DefaultsConfig::default()
        };
        let doc = lines(&[
            "Consignee: Atlantique Fret SARL",
            "Consignee contact: P. Morel",
            "Consignee address: 4 Rue du Port, Le Havre",
            "Consignee country: France",
        ]);
        let company = extract_company(
            &doc,
            &keywords(&["consignee"]),
            &defaults,
            &CountryTable::new(),
        );

        assert_eq!(company.country, "FR");
    }

    #[test]
    fn unresolvable_country_consumes_the_slot() {
        let defaults = DefaultsConfig {
            country: String::new(),
            ..DefaultsConfig::default()
        };
        let doc = lines(&[
            "Consignee: Acme",
            "Consignee contact: A",
            "Consignee address: B",
            "Consignee country: Wonderland",
            "Consignee country: France",
        ]);
        let company = extract_company(
            &doc,
            &keywords(&["consignee"]),
            &defaults,
            &CountryTable::new(),
        );

        // First qualifying line wins the slot even when resolution fails.
        assert_eq!(company.country, "");
    }

    #[test]
    fn no_matching_lines_yields_defaults_only() {
        let defaults = DefaultsConfig::default();
        let company = extract_company(
            &lines(&["nothing relevant"]),
            &keywords(&["shipper"]),
            &defaults,
            &CountryTable::new(),
        );
        assert_eq!(company.company, "");
        assert_eq!(company.city, "NA");
        assert_eq!(company.country, "DE");
    }

    #[test]
    fn normalize_enforces_city_and_country_rules() {
        let company = normalize_company(CompanyRecord {
            company: "  Acme  ".to_string(),
            city: "X".to_string(),
            country: "Germany".to_string(),
            ..CompanyRecord::default()
        });

        assert_eq!(company.company, "Acme");
        assert_eq!(company.city, "NA");
        assert_eq!(company.country, "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let company = CompanyRecord {
            company: " Acme GmbH ".to_string(),
            city: "H".to_string(),
            country: "DEU".to_string(),
            ..CompanyRecord::default()
        };
        let once = normalize_company(company.clone());
        let twice = normalize_company(once.clone());
        assert_eq!(once, twice);
    }
}
