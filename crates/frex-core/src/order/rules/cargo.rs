//! Cargo row extraction.
//!
//! Two detection paths: explicit "Item <name> Qty <n>" rows, and tabular
//! candidates split on multi-space column runs with a strictly positional
//! column-to-field mapping. No header detection - documents with reordered
//! columns misassign fields, a known limitation of the heuristic.

use crate::models::config::DefaultsConfig;
use crate::models::order::CargoRecord;

use super::patterns::{COLUMN_SPLIT, ITEM_ROW};
use super::{cast_f64, cast_u32};

/// Detects candidate cargo lines and maps them onto cargo rows.
pub struct CargoExtractor<'a> {
    cues: Vec<String>,
    defaults: &'a DefaultsConfig,
}

impl<'a> CargoExtractor<'a> {
    pub fn new(cues: &[String], defaults: &'a DefaultsConfig) -> Self {
        Self {
            cues: cues.iter().map(|c| c.to_lowercase()).collect(),
            defaults,
        }
    }

    /// Never returns an empty list: a synthetic default row stands in when
    /// the document yields no candidates.
    pub fn extract(&self, lines: &[String]) -> Vec<CargoRecord> {
        let mut cargos = Vec::new();

        for line in lines {
            // Explicit item rows take precedence over the columnar path.
            if let Some(caps) = ITEM_ROW.captures(line) {
                cargos.push(CargoRecord {
                    title: caps[1].to_string(),
                    package_count: cast_u32(&caps[2]),
                    ..self.default_row("")
                });
                continue;
            }

            let lower = line.to_lowercase();
            if !self.cues.iter().any(|cue| lower.contains(cue)) {
                continue;
            }

            let columns: Vec<&str> = COLUMN_SPLIT.split(line.trim()).collect();
            if columns.len() < 2 {
                // Not a usable tabular row; skip, don't abort.
                continue;
            }

            let title = columns
                .first()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .unwrap_or("Cargo");

            cargos.push(CargoRecord {
                title: title.to_string(),
                package_count: columns.get(1).map(|c| cast_u32(c)).unwrap_or(1),
                number: columns.get(2).unwrap_or(&"").trim().to_string(),
                value: columns.get(3).map(|c| cast_f64(c)).unwrap_or(0.0),
                weight: columns.get(4).map(|c| cast_f64(c)).unwrap_or(0.0),
                ..self.default_row("")
            });
        }

        if cargos.is_empty() {
            cargos.push(self.default_row("Default cargo"));
        }

        cargos
    }

    fn default_row(&self, title: &str) -> CargoRecord {
        CargoRecord {
            title: title.to_string(),
            package_count: 1,
            package_type: self.defaults.package_type.clone(),
            cargo_type: self.defaults.cargo_type.clone(),
            currency: self.defaults.currency.clone(),
            palletized: true,
            ..CargoRecord::default()
        }
    }
}

/// Convenience wrapper over [`CargoExtractor`].
pub fn extract_cargos(
    lines: &[String],
    cues: &[String],
    defaults: &DefaultsConfig,
) -> Vec<CargoRecord> {
    CargoExtractor::new(cues, defaults).extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn extract(raw: &[&str]) -> Vec<CargoRecord> {
        let defaults = DefaultsConfig::default();
        let cues: Vec<String> = ["qty", "quantity", "weight", "pcs", "kg"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        extract_cargos(&lines(raw), &cues, &defaults)
    }

    #[test]
    fn maps_columns_positionally() {
        let cargos = extract(&["Machine parts  3 pcs  CN-1  1,200  750"]);
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "Machine parts");
        assert_eq!(cargos[0].package_count, 3);
        assert_eq!(cargos[0].number, "CN-1");
        assert_eq!(cargos[0].value, 1200.0);
        assert_eq!(cargos[0].weight, 750.0);
        assert_eq!(cargos[0].package_type, "EPAL");
        assert_eq!(cargos[0].cargo_type, "full");
        assert!(cargos[0].palletized);
        assert!(!cargos[0].adr);
    }

    #[test]
    fn short_rows_get_defaults_for_missing_columns() {
        let cargos = extract(&["Pallets qty  4"]);
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "Pallets qty");
        assert_eq!(cargos[0].package_count, 4);
        assert_eq!(cargos[0].number, "");
        assert_eq!(cargos[0].value, 0.0);
        assert_eq!(cargos[0].weight, 0.0);
    }

    #[test]
    fn single_column_candidates_are_discarded() {
        let cargos = extract(&["Total weight: 1200 kg"]);
        // The only candidate collapses to one column, so the synthetic
        // default row stands in.
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "Default cargo");
    }

    #[test]
    fn item_rows_are_detected_inline() {
        let cargos = extract(&["Item PALLET01 Qty 5"]);
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "PALLET01");
        assert_eq!(cargos[0].package_count, 5);
    }

    #[test]
    fn no_candidates_yield_exactly_one_default_row() {
        let cargos = extract(&["Shipper: Acme", "Loading: Berlin"]);
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "Default cargo");
        assert_eq!(cargos[0].package_count, 1);
        assert_eq!(cargos[0].package_type, "EPAL");
    }

    #[test]
    fn extraction_is_never_empty() {
        assert!(!extract(&[]).is_empty());
        assert!(!extract(&["weight", "qty", "kg"]).is_empty());
    }

    #[test]
    fn rows_without_cues_are_not_candidates() {
        let cargos = extract(&[
            "Crates  2  CR-1  500  300",
            "Drums  6  DR-9  120  80.5",
        ]);
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos[0].title, "Default cargo");
    }

    #[test]
    fn multiple_candidate_rows_preserve_document_order() {
        let cargos = extract(&[
            "Crates qty  2  CR-1  500  300",
            "Drums pcs  6  DR-9  120  80.5",
        ]);
        assert_eq!(cargos.len(), 2);
        assert_eq!(cargos[0].title, "Crates qty");
        assert_eq!(cargos[1].title, "Drums pcs");
        assert_eq!(cargos[1].weight, 80.5);
    }
}
