use std::{borrow::Cow, collections::HashSet, fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

use crate::{FieldError, prelude::*, sink::MessageKey};

/// A single raw form value, as handed over by the presentation layer.
///
/// `Absent` and `Text("")` are both empty. `Number(0)` is not: zero is
/// rejected later by range checks, never by the emptiness check.
///
/// Deserializes from any scalar: `null` is `Absent`, integers that fit
/// `i64` are `Number`, and everything else (floats, larger integers,
/// booleans) is kept as `Text` so the field checks decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Absent,
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// True for `Absent` and for the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Numeric view of the value. Text is trimmed and parsed as a base-10
    /// integer; anything else (including decimals) is `NotNumeric`.
    ///
    /// # Errors
    /// `FieldError::Empty` for empty values, `FieldError::NotNumeric` for
    /// text that is not an integer.
    pub fn to_number(&self) -> Result<i64, FieldError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Absent => Err(FieldError::Empty),
            Self::Text(text) if text.is_empty() => Err(FieldError::Empty),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| FieldError::NotNumeric(text.clone())),
        }
    }

    /// Textual view used by the name, number and pastime checks.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or_else(|_| FieldValue::Text(v.to_string()), FieldValue::Number))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// The input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "pastime")]
    Pastime,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Number,
        Self::Day,
        Self::Month,
        Self::Year,
        Self::Pastime,
    ];

    /// Slot this field reports into. Day, month and year share `Date`.
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::Name => MessageKey::Name,
            Self::Number => MessageKey::Number,
            Self::Day | Self::Month | Self::Year => MessageKey::Date,
            Self::Pastime => MessageKey::Pastime,
        }
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.to_string() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_owned()))
    }
}

/// Error type for building a snapshot from submitted pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Key does not name a form field.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The same field was submitted twice.
    #[error("Duplicate form field: {0}")]
    DuplicateField(Field),
}

/// The six values of one form submission. Missing fields are `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSnapshot {
    pub name: FieldValue,
    pub number: FieldValue,
    pub day: FieldValue,
    pub month: FieldValue,
    pub year: FieldValue,
    pub pastime: FieldValue,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field, builder style.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    pub const fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Pastime => &self.pastime,
        }
    }

    const fn get_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Name => &mut self.name,
            Field::Number => &mut self.number,
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Pastime => &mut self.pastime,
        }
    }

    /// Builds a snapshot from `(key, value)` pairs such as a decoded form
    /// body. Every value is kept as text.
    ///
    /// # Errors
    /// `SnapshotError::Field` for an unknown key,
    /// `SnapshotError::DuplicateField` when a key repeats.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::new();
        let mut seen = HashSet::new();
        for (key, value) in pairs {
            let field: Field = key.parse()?;
            if !seen.insert(field) {
                return Err(SnapshotError::DuplicateField(field));
            }
            *snapshot.get_mut(field) = FieldValue::from(value);
        }
        Ok(snapshot)
    }
}
