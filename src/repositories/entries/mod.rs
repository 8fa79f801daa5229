//! 방명록 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`entry_repo::EntryRepository`] - 영속화 계약
//! - [`entry_repo::MongoEntryRepository`] - MongoDB 구현
//! - [`memory_repo::InMemoryEntryRepository`] - 메모리 구현 (기본값, 테스트용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::entries::{EntryRepository, InMemoryEntryRepository};
//!
//! let repo = InMemoryEntryRepository::new();
//! let saved = repo.save(entry).await?;
//! let newest_first = repo.find_all_by_order_by_date_desc().await?;
//! ```

pub mod entry_repo;
pub mod memory_repo;

pub use entry_repo::{EntryRepository, MongoEntryRepository};
pub use memory_repo::InMemoryEntryRepository;
