//! Records: values that can describe themselves as ordered named fields.

use serde::{Deserialize, Serialize};

/// One named field of a record, already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// A value that can be exported as one table row.
///
/// Implementations return their fields in declaration order. Every record in
/// a single export is expected to describe the same field names in the same
/// order; the first record decides the column set.
pub trait Record {
    fn describe(&self) -> Vec<Field>;

    /// Field names in declaration order.
    fn field_names(&self) -> Vec<String> {
        self.describe().into_iter().map(|field| field.name).collect()
    }

    /// Field values in declaration order.
    fn field_values(&self) -> Vec<String> {
        self.describe().into_iter().map(|field| field.value).collect()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn describe(&self) -> Vec<Field> {
        (**self).describe()
    }
}

impl Record for Vec<Field> {
    fn describe(&self) -> Vec<Field> {
        self.clone()
    }
}

impl Record for Vec<(String, String)> {
    fn describe(&self) -> Vec<Field> {
        self.iter()
            .map(|(name, value)| Field::new(name.as_str(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
        age: u32,
    }

    impl Record for Person {
        fn describe(&self) -> Vec<Field> {
            vec![Field::new("Name", self.name), Field::new("Age", self.age)]
        }
    }

    #[test]
    fn names_and_values_follow_declaration_order() {
        let person = Person {
            name: "A",
            age: 30,
        };
        assert_eq!(person.field_names(), vec!["Name", "Age"]);
        assert_eq!(person.field_values(), vec!["A", "30"]);
    }

    #[test]
    fn pair_vectors_are_records() {
        let record = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        assert_eq!(record.field_names(), vec!["b", "a"]);
        assert_eq!(record.field_values(), vec!["2", "1"]);
    }
}
