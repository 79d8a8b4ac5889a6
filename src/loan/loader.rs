//! Load loan portfolios from CSV and JSON sources

use super::LoanRecord;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the portfolio export format
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "TenureMonths")]
    tenure_months: u32,
    #[serde(rename = "StartDate")]
    start_date: Option<chrono::NaiveDate>,
    #[serde(rename = "CompletedMonths")]
    completed_months: Option<u32>,
}

impl CsvRow {
    fn into_record(self) -> LoanRecord {
        LoanRecord {
            id: None,
            name: self.name,
            principal: self.principal,
            interest_rate: self.interest_rate,
            tenure_months: self.tenure_months,
            start_date: self.start_date,
            explicit_completed_months: self.completed_months,
        }
    }
}

/// Load loan records from a CSV file
///
/// Records come back unvalidated; the tracking-mode contract is enforced
/// when a store admits them.
pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LoanRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// Load loan records from any CSV reader (e.g., string buffer, network stream)
pub fn load_records_csv_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LoanRecord>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// Load loan records from a JSON array, the shape transport layers exchange
pub fn load_records_json<R: std::io::Read>(reader: R) -> Result<Vec<LoanRecord>, Box<dyn Error>> {
    let records: Vec<LoanRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_mixed_modes() {
        let data = "\
Name,Principal,InterestRate,TenureMonths,StartDate,CompletedMonths
Car Loan,800000,8.5,60,2025-08-06,
Phone EMI,45000,11.25,12,,4
";
        let records = load_records_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "Car Loan");
        assert!(records[0].start_date.is_some());
        assert_eq!(records[0].explicit_completed_months, None);

        assert_eq!(records[1].tenure_months, 12);
        assert_eq!(records[1].start_date, None);
        assert_eq!(records[1].explicit_completed_months, Some(4));
    }

    #[test]
    fn test_load_csv_rejects_malformed_row() {
        let data = "\
Name,Principal,InterestRate,TenureMonths,StartDate,CompletedMonths
Car Loan,not-a-number,8.5,60,2025-08-06,
";
        assert!(load_records_csv_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_json_array() {
        let data = r#"[
            {
                "name": "Home Loan",
                "principal": 2500000.0,
                "interest_rate": 9.1,
                "tenure_months": 240,
                "start_date": "2024-06-01"
            },
            {
                "id": 3,
                "name": "Bike Loan",
                "principal": 120000.0,
                "interest_rate": 10.0,
                "tenure_months": 36,
                "explicit_completed_months": 7
            }
        ]"#;
        let records = load_records_json(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start_date.unwrap().to_string(), "2024-06-01");
        assert_eq!(records[1].id, Some(3));
        assert_eq!(records[1].explicit_completed_months, Some(7));
    }
}
