//! # 방명록 리포지토리 구현
//!
//! 방명록 항목의 영속화 계약([`EntryRepository`])과 MongoDB 구현체입니다.
//!
//! ## 계약
//!
//! 코어 로직이 의존하는 연산은 두 가지뿐입니다.
//!
//! - `save(Entry) -> Entry`: 식별자가 부여된 항목을 반환
//! - `find_all_by_order_by_date_desc() -> Vec<Entry>`: 최신 항목이 먼저 오는 전체 목록

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::entries::Entry;
use crate::errors::AppError;

/// 방명록 항목 영속화 계약
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// 항목을 저장하고 식별자가 부여된 항목을 반환합니다.
    ///
    /// 전달된 항목의 필드는 변경하지 않고 그대로 저장합니다.
    async fn save(&self, entry: Entry) -> Result<Entry, AppError>;

    /// 작성 시각 내림차순으로 모든 항목을 조회합니다.
    ///
    /// 같은 시각(밀리초 단위)에 작성된 항목은 나중에 저장된 항목이 먼저 옵니다.
    async fn find_all_by_order_by_date_desc(&self) -> Result<Vec<Entry>, AppError>;
}

/// MongoDB `entries` 컬렉션 기반 리포지토리
///
/// ## 인덱스
/// - `date` (내림차순), `_id` (내림차순): 최신순 목록 조회 최적화
pub struct MongoEntryRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoEntryRepository {
    /// 방명록 컬렉션 이름
    pub const COLLECTION: &'static str = "entries";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Entry> {
        self.db.get_database().collection::<Entry>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다. 이미 있으면 아무 일도 일어나지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("date_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_index(date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EntryRepository for MongoEntryRepository {
    async fn save(&self, entry: Entry) -> Result<Entry, AppError> {
        let result = self.collection()
            .insert_one(&entry)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("예상하지 못한 _id 형식: {}", result.inserted_id))
        })?;

        debug!("방명록 저장 완료: {}", id.to_hex());
        Ok(entry.with_id(id))
    }

    async fn find_all_by_order_by_date_desc(&self) -> Result<Vec<Entry>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "date": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
