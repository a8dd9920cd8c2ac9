//! Load plans and condition tables from disk
//!
//! Plans are JSON documents. Condition timelines can also be loaded on their
//! own from CSV tables with columns `EffectiveMonth,RatePct,Movement`; blank
//! cells mean "unset" and ids are assigned in row order.

use super::{Condition, Plan};
use crate::calendar::Month;
use csv::Reader;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Raw CSV row matching the condition table columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "EffectiveMonth")]
    effective: String,
    #[serde(rename = "RatePct")]
    rate: Option<f64>,
    #[serde(rename = "Movement")]
    movement: Option<f64>,
}

impl CsvRow {
    fn to_condition(self, id: u32) -> Result<Condition, Box<dyn Error>> {
        let effective = match self.effective.trim() {
            "" => None,
            text => Some(text.parse::<Month>()?),
        };

        Ok(Condition {
            id,
            effective,
            rate: self.rate,
            movement: self.movement,
        })
    }
}

/// Load a condition table from a CSV file
pub fn load_conditions<P: AsRef<Path>>(path: P) -> Result<Vec<Condition>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut conditions = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        conditions.push(row.to_condition(index as u32)?);
    }

    Ok(conditions)
}

/// Load a condition table from any reader (e.g., string buffer, network stream)
pub fn load_conditions_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Condition>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut conditions = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        conditions.push(row.to_condition(index as u32)?);
    }

    Ok(conditions)
}

/// Parse a plan from a JSON document and validate it
pub fn plan_from_json(json: &str) -> Result<Plan, Box<dyn Error>> {
    let plan: Plan = serde_json::from_str(json)?;
    plan.validate()?;
    Ok(plan)
}

/// Load a plan from a JSON file
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    plan_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_conditions_from_reader() {
        let data = "\
EffectiveMonth,RatePct,Movement
2026-08,7,500
2036-08,7,-2000
,,
";
        let conditions = load_conditions_from_reader(data.as_bytes()).unwrap();
        assert_eq!(conditions.len(), 3);

        assert_eq!(conditions[0].id, 0);
        assert_eq!(conditions[0].effective, Some(Month::new(2026, 8)));
        assert_eq!(conditions[0].rate, Some(7.0));
        assert_eq!(conditions[0].movement, Some(500.0));

        assert_eq!(conditions[1].movement, Some(-2000.0));

        // Blank cells stay unset
        assert_eq!(conditions[2].id, 2);
        assert_eq!(conditions[2].effective, None);
        assert_eq!(conditions[2].rate, None);
        assert_eq!(conditions[2].movement, None);
    }

    #[test]
    fn test_load_conditions_rejects_bad_month() {
        let data = "\
EffectiveMonth,RatePct,Movement
2026-13,7,500
";
        assert!(load_conditions_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_plan_from_json() {
        let json = r#"{
            "birth_month": "1976-02",
            "initial_capital": 100000.0,
            "conditions": [
                {"id": 0, "effective": "2026-08", "rate": 7.0, "movement": 500.0},
                {"id": 1, "effective": "2036-08", "rate": 7.0, "movement": -2000.0},
                {"id": 2}
            ]
        }"#;

        let plan = plan_from_json(json).unwrap();
        assert_eq!(plan.birth_month, Month::new(1976, 2));
        assert_eq!(plan.initial_capital, 100_000.0);
        assert_eq!(plan.conditions.len(), 3);
        assert_eq!(plan.conditions[1].effective, Some(Month::new(2036, 8)));

        // Fields omitted from the document stay unset
        assert_eq!(plan.conditions[2].effective, None);
        assert_eq!(plan.conditions[2].rate, None);
    }

    #[test]
    fn test_plan_from_json_rejects_duplicate_ids() {
        let json = r#"{
            "birth_month": "1976-02",
            "initial_capital": 100000.0,
            "conditions": [
                {"id": 0, "effective": "2026-08"},
                {"id": 0, "effective": "2027-08"}
            ]
        }"#;
        assert!(plan_from_json(json).is_err());
    }
}
