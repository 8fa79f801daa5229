//! 프로세스 메모리 기반 방명록 리포지토리
//!
//! 외부 데이터베이스 없이 실행하거나 테스트할 때 사용합니다.
//! 프로세스가 끝나면 모든 항목이 사라집니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::entries::Entry;
use crate::errors::AppError;
use crate::repositories::entries::EntryRepository;

/// 메모리 기반 방명록 리포지토리
///
/// 항목은 저장 순서대로 보관하고, 식별자는 MongoDB 와 같은 형식의 `ObjectId` 로 부여합니다.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn save(&self, entry: Entry) -> Result<Entry, AppError> {
        let saved = entry.with_id(ObjectId::new());

        self.entries
            .write()
            .map_err(|_| AppError::DatabaseError("entry store lock poisoned".to_string()))?
            .push(saved.clone());

        Ok(saved)
    }

    async fn find_all_by_order_by_date_desc(&self) -> Result<Vec<Entry>, AppError> {
        let entries = self.entries
            .read()
            .map_err(|_| AppError::DatabaseError("entry store lock poisoned".to_string()))?;

        // 역순으로 복사한 뒤 안정 정렬하면 같은 시각의 항목은 최근 저장 순서가 유지됩니다.
        let mut sorted: Vec<Entry> = entries.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));

        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::entries::request::GuestbookSubmission;
    use mongodb::bson::DateTime;

    fn entry(name: &str) -> Entry {
        let (draft, _) = GuestbookSubmission::new(name, "text", "test@mail.com", None)
            .into_valid()
            .unwrap()
            .into_parts();
        Entry::new(draft, None)
    }

    #[actix_web::test]
    async fn test_save_assigns_identifier() {
        let repo = InMemoryEntryRepository::new();
        let saved = repo.save(entry("Arni")).await.unwrap();

        assert!(saved.id().is_some());
        assert_eq!(saved.name(), "Arni");
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_listing_is_newest_first() {
        let repo = InMemoryEntryRepository::new();
        let base = DateTime::now().timestamp_millis();

        repo.save(entry("older").with_date(DateTime::from_millis(base - 2_000))).await.unwrap();
        repo.save(entry("newest").with_date(DateTime::from_millis(base))).await.unwrap();
        repo.save(entry("middle").with_date(DateTime::from_millis(base - 1_000))).await.unwrap();

        let names: Vec<String> = repo
            .find_all_by_order_by_date_desc()
            .await
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();

        assert_eq!(names, vec!["newest", "middle", "older"]);
    }

    #[actix_web::test]
    async fn test_same_timestamp_prefers_latest_insert() {
        let repo = InMemoryEntryRepository::new();
        let now = DateTime::now();

        repo.save(entry("first").with_date(now)).await.unwrap();
        repo.save(entry("second").with_date(now)).await.unwrap();

        let listed = repo.find_all_by_order_by_date_desc().await.unwrap();
        assert_eq!(listed[0].name(), "second");
        assert_eq!(listed[1].name(), "first");
    }
}
