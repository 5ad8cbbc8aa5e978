//! Athlete medal records

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

use super::{Column, TableRow, Value};

/// One row of the olympic athletes dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: u32,
    pub athlete: String,
    pub country: String,
    #[serde(default)]
    pub age: Option<u32>,
    pub year: u32,
}

/// Columns shown for [`Athlete`] rows, in display order.
pub fn athlete_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("athlete", "Athlete"),
        Column::new("country", "Country"),
        Column::new("age", "Age"),
        Column::new("year", "Year"),
    ]
}

impl TableRow for Athlete {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> Value {
        match column_id {
            "id" => self.id.into(),
            "athlete" => self.athlete.as_str().into(),
            "country" => self.country.as_str().into(),
            "age" => self.age.into(),
            "year" => self.year.into(),
            _ => Value::Null,
        }
    }

    fn set_value(&mut self, column_id: &str, text: &str) -> Result<(), FieldError> {
        match column_id {
            "id" => Err(FieldError::read_only(column_id)),
            "athlete" => {
                self.athlete = text.to_string();
                Ok(())
            }
            "country" => {
                self.country = text.to_string();
                Ok(())
            }
            "age" => {
                let text = text.trim();
                self.age = if text.is_empty() {
                    None
                } else {
                    Some(parse_number(column_id, text)?)
                };
                Ok(())
            }
            "year" => {
                self.year = parse_number(column_id, text.trim())?;
                Ok(())
            }
            _ => Err(FieldError::missing(column_id)),
        }
    }
}

fn parse_number(column: &str, text: &str) -> Result<u32, FieldError> {
    text.parse()
        .map_err(|_| FieldError::parse(column, "a whole number", text))
}
