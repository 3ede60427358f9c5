//! PostgreSQL student repository
//!
//! Keys are returned as text (`id::text`). Path ids are compared against
//! the key column after a cast to its configured type, so the primary-key
//! index is used and an unparsable id fails in storage.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, StudentStore};
use crate::config::StudentKey;
use crate::models::{Student, StudentPayload};

/// Statements that filter on the key, built once per key type
#[derive(Debug, Clone)]
struct KeyedStatements {
    get: String,
    update: String,
    delete: String,
}

impl KeyedStatements {
    fn new(key: StudentKey) -> Self {
        let ty = key.sql_type();
        Self {
            get: format!(
                "SELECT id::text AS id, name, email, borrowed_books \
                 FROM students WHERE id = $1::text::{ty}"
            ),
            update: format!(
                "UPDATE students SET name = $1, email = $2, borrowed_books = $3 \
                 WHERE id = $4::text::{ty}"
            ),
            delete: format!("DELETE FROM students WHERE id = $1::text::{ty}"),
        }
    }
}

/// Student repository backed by a connection pool
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
    statements: KeyedStatements,
}

impl PgStudentStore {
    /// Store for a table with an integer (serial) key.
    pub fn new(pool: PgPool) -> Self {
        Self::with_key(pool, StudentKey::default())
    }

    pub fn with_key(pool: PgPool, key: StudentKey) -> Self {
        Self {
            pool,
            statements: KeyedStatements::new(key),
        }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students: Vec<Student> = sqlx::query_as(
            "SELECT id::text AS id, name, email, borrowed_books FROM students",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Insert and read back the generated key in one round trip.
    async fn create(&self, payload: StudentPayload) -> Result<Student, DbError> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO students (name, email, borrowed_books)
            VALUES ($1, $2, $3)
            RETURNING id::text
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(payload.borrowed_books())
        .fetch_one(&self.pool)
        .await?;

        Ok(payload.into_student(id))
    }

    async fn get(&self, id: &str) -> Result<Student, DbError> {
        sqlx::query_as(&self.statements.get)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::student_not_found(id))
    }

    /// Full replacement. Zero affected rows means the id does not exist.
    async fn update(&self, id: &str, payload: StudentPayload) -> Result<Student, DbError> {
        let result = sqlx::query(&self.statements.update)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.borrowed_books())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::student_not_found(id));
        }

        Ok(payload.into_student(id))
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query(&self.statements.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::student_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::connect;

    // Integration tests - run with DATABASE_URL set against a database
    // that has the students table:
    // cargo test -p student-server -- --ignored

    async fn store() -> PgStudentStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgStudentStore::new(connect(&url).await.expect("connect failed"))
    }

    fn payload(name: &str, books: &[&str]) -> StudentPayload {
        StudentPayload {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            borrowed_books: Some(books.iter().map(|b| b.to_string()).collect()),
        }
    }

    #[test]
    fn key_filters_cast_the_parameter() {
        let statements = KeyedStatements::new(StudentKey::BigInt);
        assert!(statements.get.ends_with("WHERE id = $1::text::bigint"));
        assert!(statements.update.ends_with("WHERE id = $4::text::bigint"));
        assert!(!statements.delete.contains("id::text"));

        let statements = KeyedStatements::new(StudentKey::Uuid);
        assert_eq!(
            statements.delete,
            "DELETE FROM students WHERE id = $1::text::uuid"
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let store = store().await;

        let created = store.create(payload("Ada", &["b1", "b2"])).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        store.delete(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn empty_books_stay_empty() {
        let store = store().await;

        let created = store.create(payload("Grace", &[])).await.unwrap();
        let fetched = store.get(&created.id).await.unwrap();
        assert!(fetched.borrowed_books.is_empty());

        store.delete(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_id() {
        let store = store().await;

        let err = store
            .update("-1", payload("Nobody", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = store.delete("-1").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unparsable_id_is_storage_error() {
        let store = store().await;

        let err = store.get("not-a-number").await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn null_books_decode_as_empty() {
        let store = store().await;

        let id: String = sqlx::query_scalar(
            "INSERT INTO students (name, email, borrowed_books) \
             VALUES ('Null', 'null@example.com', NULL) RETURNING id::text",
        )
        .fetch_one(&store.pool)
        .await
        .unwrap();

        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.borrowed_books, Vec::<String>::new());

        store.delete(&id).await.unwrap();
    }
}
