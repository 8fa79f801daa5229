//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 방명록 항목의 저장과 최신순 조회를 제공합니다.
//! `ENTRY_STORE` 설정에 따라 MongoDB 또는 메모리 구현을 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::entries::{EntryRepository, MongoEntryRepository};
//!
//! let repo: Arc<dyn EntryRepository> = Arc::new(MongoEntryRepository::new(database));
//! let entries = repo.find_all_by_order_by_date_desc().await?;
//! ```

pub mod entries;
