//! Visitor record and the fixed field collection order.

use serde::{Deserialize, Serialize};

/// A field of the visitor record, in the order it is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Country,
}

impl Field {
    /// The fixed collection order.
    pub const ORDER: [Field; 5] = [
        Field::Name,
        Field::Company,
        Field::Email,
        Field::Phone,
        Field::Country,
    ];

    /// The field collected after this one, if any.
    pub fn next(&self) -> Option<Field> {
        match self {
            Self::Name => Some(Self::Company),
            Self::Company => Some(Self::Email),
            Self::Email => Some(Self::Phone),
            Self::Phone => Some(Self::Country),
            Self::Country => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Country => "country",
        }
    }

    pub fn parse(s: &str) -> Option<Field> {
        match s {
            "name" => Some(Self::Name),
            "company" => Some(Self::Company),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "country" => Some(Self::Country),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record being filled across a session.
///
/// The transport layer owns it between turns; the core receives and returns
/// a full copy each turn and keeps no session state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorRecord {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl VisitorRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Company => self.company = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Country => self.country = value,
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, String::new());
    }

    /// All five fields are filled.
    pub fn is_complete(&self) -> bool {
        Field::ORDER.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Reset every field to empty (full restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_walks_all_fields() {
        let mut current = Field::Name;
        for expected in &Field::ORDER[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn field_parse_round_trips() {
        for field in Field::ORDER {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("fax"), None);
    }

    #[test]
    fn get_set_clear() {
        let mut record = VisitorRecord::default();
        assert!(!record.is_complete());

        for field in Field::ORDER {
            record.set(field, format!("value-{field}"));
        }
        assert!(record.is_complete());
        assert_eq!(record.get(Field::Email), "value-email");

        record.clear(Field::Phone);
        assert!(!record.is_complete());
        assert_eq!(record.name, "value-name");

        record.reset();
        assert_eq!(record, VisitorRecord::default());
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let record: VisitorRecord = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.company, "");
    }
}
