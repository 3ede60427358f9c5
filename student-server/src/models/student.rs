//! Student record and request body

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A student as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key in text form, assigned by storage
    pub id: String,
    pub name: String,
    pub email: String,
    /// Book identifiers, in storage order. Never null on the wire.
    pub borrowed_books: Vec<String>,
}

/// Rows are selected with `id::text`, so the key decodes as a string
/// whatever the column type is. A NULL array decodes as empty.
impl<'r> FromRow<'r, PgRow> for Student {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let borrowed_books: Option<Vec<String>> = row.try_get("borrowed_books")?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            borrowed_books: borrowed_books.unwrap_or_default(),
        })
    }
}

/// Request body for create and update.
///
/// Any `id` in the body is ignored: storage assigns it on create and
/// the path parameter decides it on update.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    /// Missing or `null` both mean "no books".
    #[serde(default)]
    pub borrowed_books: Option<Vec<String>>,
}

impl StudentPayload {
    /// Borrowed books as a slice, empty when the body left them out.
    pub fn borrowed_books(&self) -> &[String] {
        self.borrowed_books.as_deref().unwrap_or_default()
    }

    /// Build the full record once an id is known.
    pub fn into_student(self, id: impl Into<String>) -> Student {
        Student {
            id: id.into(),
            name: self.name,
            email: self.email,
            borrowed_books: self.borrowed_books.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_ignores_id() {
        let payload: StudentPayload = serde_json::from_value(json!({
            "id": "999",
            "name": "Ada",
            "email": "ada@x.com",
            "borrowed_books": ["b1", "b2"]
        }))
        .unwrap();

        let student = payload.into_student("1");
        assert_eq!(student.id, "1");
        assert_eq!(student.borrowed_books, vec!["b1", "b2"]);
    }

    #[test]
    fn missing_or_null_books_become_empty() {
        let missing: StudentPayload =
            serde_json::from_value(json!({"name": "Ada", "email": "ada@x.com"})).unwrap();
        assert!(missing.borrowed_books().is_empty());

        let null: StudentPayload = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@x.com",
            "borrowed_books": null
        }))
        .unwrap();
        assert_eq!(null.into_student("7").borrowed_books, Vec::<String>::new());
    }

    #[test]
    fn rejects_missing_name() {
        let result = serde_json::from_value::<StudentPayload>(json!({"email": "ada@x.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn empty_books_serialize_as_array() {
        let student = Student {
            id: "3".into(),
            name: "Ada".into(),
            email: "ada@x.com".into(),
            borrowed_books: vec![],
        };

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["borrowed_books"], json!([]));
    }
}
