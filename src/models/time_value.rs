use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};

/// A duration field of a work record as it arrives from the store:
/// either a plain number of minutes or an `HH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Minutes(f64),
    Text(String),
    #[default]
    Missing,
}

impl TimeValue {
    pub fn minutes(m: f64) -> Self {
        TimeValue::Minutes(m)
    }

    pub fn text<S: Into<String>>(s: S) -> Self {
        TimeValue::Text(s.into())
    }

    /// CLI input: a bare number is minutes, anything else is kept as text
    /// and normalized later.
    pub fn from_input(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return TimeValue::Missing;
        }
        match t.parse::<f64>() {
            Ok(n) => TimeValue::Minutes(n),
            Err(_) => TimeValue::Text(t.to_string()),
        }
    }
}

// SQLite keeps the storage class per value, so the column stays untyped
// and both shapes survive a round-trip.
impl FromSql for TimeValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => TimeValue::Missing,
            ValueRef::Integer(i) => TimeValue::Minutes(i as f64),
            ValueRef::Real(f) => TimeValue::Minutes(f),
            ValueRef::Text(t) => TimeValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(_) => TimeValue::Missing,
        })
    }
}

impl ToSql for TimeValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            TimeValue::Minutes(m) => ToSqlOutput::Owned(Value::Real(*m)),
            TimeValue::Text(s) => ToSqlOutput::Owned(Value::Text(s.clone())),
            TimeValue::Missing => ToSqlOutput::Owned(Value::Null),
        })
    }
}
