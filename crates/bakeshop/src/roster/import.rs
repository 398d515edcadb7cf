use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::Roster;
use crate::customer::{
    CustomerId, CustomerProfile, ReactionSet, TastePreferences, MAX_TASTE_WEIGHT,
    MIN_TASTE_WEIGHT,
};

/// Error enumeration for roster CSV imports. Row numbers count data rows,
/// starting at 1 below the header.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: customer name is blank")]
    BlankName { row: usize },
    #[error(
        "row {row}: {column} must be between {min} and {max}, found {value}",
        min = MIN_TASTE_WEIGHT,
        max = MAX_TASTE_WEIGHT
    )]
    WeightOutOfRange {
        row: usize,
        column: &'static str,
        value: u8,
    },
    #[error("row {row}: {column} reaction phrase is blank")]
    BlankReaction { row: usize, column: &'static str },
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sweetness")]
    sweetness: u8,
    #[serde(rename = "Fruitiness")]
    fruitiness: u8,
    #[serde(rename = "Richness")]
    richness: u8,
    #[serde(rename = "Creativity")]
    creativity: u8,
    #[serde(rename = "Love")]
    love: String,
    #[serde(rename = "Like")]
    like: String,
    #[serde(rename = "Neutral")]
    neutral: String,
    #[serde(rename = "Dislike")]
    dislike: String,
}

impl Roster {
    /// Load a custom roster from a CSV file with the columns
    /// `Name,Sweetness,Fruitiness,Richness,Creativity,Love,Like,Neutral,Dislike`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Same as [`Roster::from_csv_path`] but over any reader. Customer ids
    /// are assigned in row order, starting at 1.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut customers = Vec::new();
        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = index + 1;
            let parsed = record?;
            customers.push(customer_from_row(row, parsed)?);
        }

        Ok(Self::new(customers))
    }
}

fn customer_from_row(row: usize, parsed: RosterRow) -> Result<CustomerProfile, RosterImportError> {
    let name = normalize_name(&parsed.name);
    if name.is_empty() {
        return Err(RosterImportError::BlankName { row });
    }

    let tastes = TastePreferences {
        sweetness: check_weight(row, "Sweetness", parsed.sweetness)?,
        fruitiness: check_weight(row, "Fruitiness", parsed.fruitiness)?,
        richness: check_weight(row, "Richness", parsed.richness)?,
        creativity: check_weight(row, "Creativity", parsed.creativity)?,
    };

    let reactions = ReactionSet {
        love: check_phrase(row, "Love", parsed.love)?,
        like: check_phrase(row, "Like", parsed.like)?,
        neutral: check_phrase(row, "Neutral", parsed.neutral)?,
        dislike: check_phrase(row, "Dislike", parsed.dislike)?,
    };

    Ok(CustomerProfile {
        id: CustomerId(row as u32),
        name,
        tastes,
        reactions,
    })
}

fn normalize_name(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn check_weight(row: usize, column: &'static str, value: u8) -> Result<u8, RosterImportError> {
    if (MIN_TASTE_WEIGHT..=MAX_TASTE_WEIGHT).contains(&value) {
        Ok(value)
    } else {
        Err(RosterImportError::WeightOutOfRange { row, column, value })
    }
}

fn check_phrase(
    row: usize,
    column: &'static str,
    value: String,
) -> Result<String, RosterImportError> {
    if value.trim().is_empty() {
        Err(RosterImportError::BlankReaction { row, column })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Sweetness,Fruitiness,Richness,Creativity,Love,Like,Neutral,Dislike";

    fn roster_csv(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    #[test]
    fn imports_customers_in_row_order() {
        let data = roster_csv(&[
            "Ava,5,6,7,8,Adore it!,Nice.,Okay.,No thanks.",
            "  Ben   Ortiz ,1,1,10,1,Perfect!,Good.,Fine.,Never again.",
        ]);

        let roster = Roster::from_csv_reader(data.as_bytes()).expect("valid roster");
        assert_eq!(roster.len(), 2);

        let ava = roster.get(CustomerId(1)).expect("first row");
        assert_eq!(ava.name, "Ava");
        assert_eq!(ava.tastes.creativity, 8);
        assert_eq!(ava.reactions.love, "Adore it!");

        let ben = roster.get(CustomerId(2)).expect("second row");
        assert_eq!(ben.name, "Ben Ortiz");
        assert_eq!(ben.tastes.richness, 10);
    }

    #[test]
    fn rejects_weights_outside_the_range() {
        let data = roster_csv(&["Ava,5,6,7,8,a,b,c,d", "Ben,0,5,5,5,a,b,c,d"]);

        let err = Roster::from_csv_reader(data.as_bytes()).unwrap_err();
        match err {
            RosterImportError::WeightOutOfRange { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Sweetness");
                assert_eq!(value, 0);
            }
            other => panic!("expected weight error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_names_and_phrases() {
        let blank_name = roster_csv(&["   ,5,5,5,5,a,b,c,d"]);
        assert!(matches!(
            Roster::from_csv_reader(blank_name.as_bytes()).unwrap_err(),
            RosterImportError::BlankName { row: 1 }
        ));

        let blank_phrase = roster_csv(&["Ava,5,5,5,5,a,b,,d"]);
        match Roster::from_csv_reader(blank_phrase.as_bytes()).unwrap_err() {
            RosterImportError::BlankReaction { row, column } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Neutral");
            }
            other => panic!("expected blank reaction error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_weights_surface_as_csv_errors() {
        let data = roster_csv(&["Ava,sweet,6,7,8,a,b,c,d"]);
        assert!(matches!(
            Roster::from_csv_reader(data.as_bytes()).unwrap_err(),
            RosterImportError::Csv(_)
        ));
    }
}
