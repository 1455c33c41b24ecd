use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One course entry, built positionally from a single CSV row.
///
/// Text fields are carried verbatim; `uuid` is not validated as a UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub uuid: String,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "numHoles")]
    pub num_holes: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level document wrapping every record under the `courses` key,
/// in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDocument {
    pub courses: Vec<CourseRecord>,
}

impl CourseRecord {
    /// Maps a row to a record by fixed column position: uuid, name, city,
    /// state, numHoles, latitude, longitude. A row with fewer than 7 fields
    /// or non-numeric text in a numeric column is an error.
    pub fn from_row(row: &csv::StringRecord, line: u64) -> Result<Self> {
        let field = |index: usize| {
            row.get(index)
                .with_context(|| format!("row {line}: missing column {index}"))
        };

        Ok(Self {
            uuid: field(0)?.to_owned(),
            name: field(1)?.to_owned(),
            city: field(2)?.to_owned(),
            state: field(3)?.to_owned(),
            num_holes: parse_field(row, 4, "numHoles", line)?,
            latitude: parse_field(row, 5, "latitude", line)?,
            longitude: parse_field(row, 6, "longitude", line)?,
        })
    }
}

fn parse_field<T>(row: &csv::StringRecord, index: usize, name: &str, line: u64) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = row
        .get(index)
        .with_context(|| format!("row {line}: missing column {index} ({name})"))?;

    raw.parse()
        .with_context(|| format!("row {line}: cannot parse {name} from '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn maps_row_positionally() {
        let record = CourseRecord::from_row(
            &row(&["u1", "NameA", "CityA", "ST", "18", "40.0", "-80.0"]),
            1,
        )
        .unwrap();

        assert_eq!(record.uuid, "u1");
        assert_eq!(record.name, "NameA");
        assert_eq!(record.city, "CityA");
        assert_eq!(record.state, "ST");
        assert_eq!(record.num_holes, 18);
        assert_eq!(record.latitude, 40.0);
        assert_eq!(record.longitude, -80.0);
    }

    #[test]
    fn keeps_text_fields_verbatim() {
        let record = CourseRecord::from_row(
            &row(&["u1", " Café São Par 3 ", "cityA", "st", "9", "41.5", "-79.25"]),
            1,
        )
        .unwrap();

        // no trimming, no case normalization
        assert_eq!(record.name, " Café São Par 3 ");
        assert_eq!(record.city, "cityA");
        assert_eq!(record.state, "st");
    }

    #[test]
    fn rejects_short_row() {
        let err = CourseRecord::from_row(&row(&["u1", "NameA", "CityA", "ST"]), 3).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn rejects_non_numeric_holes() {
        let err = CourseRecord::from_row(
            &row(&["u1", "NameA", "CityA", "ST", "abc", "40.0", "-80.0"]),
            1,
        )
        .unwrap_err();
        assert!(err.to_string().contains("numHoles"));
    }

    #[test]
    fn rejects_fractional_holes() {
        assert!(CourseRecord::from_row(
            &row(&["u1", "NameA", "CityA", "ST", "18.5", "40.0", "-80.0"]),
            1,
        )
        .is_err());
    }
}
