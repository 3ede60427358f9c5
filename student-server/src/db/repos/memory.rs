//! In-memory student store for testing

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, StudentStore};
use crate::models::{Student, StudentPayload};

/// Map-backed store with serial ids starting at 1.
#[derive(Default)]
pub struct MemoryStudentStore {
    next_id: AtomicU64,
    students: RwLock<BTreeMap<String, Student>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored students
    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>, DbError> {
        Ok(self.students.read().await.values().cloned().collect())
    }

    async fn create(&self, payload: StudentPayload) -> Result<Student, DbError> {
        let id = (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
        let student = payload.into_student(id.clone());
        self.students.write().await.insert(id, student.clone());
        Ok(student)
    }

    async fn get(&self, id: &str) -> Result<Student, DbError> {
        self.students
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::student_not_found(id))
    }

    async fn update(&self, id: &str, payload: StudentPayload) -> Result<Student, DbError> {
        let mut students = self.students.write().await;
        let slot = students
            .get_mut(id)
            .ok_or_else(|| DbError::student_not_found(id))?;

        *slot = payload.into_student(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        self.students
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DbError::student_not_found(id))
    }
}
