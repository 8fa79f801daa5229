//! 방명록 서비스 모듈
//!
//! 제출 검증, 첨부 저장, 항목 저장과 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::guestbook::GuestbookService;
//!
//! let service = GuestbookService::new(repository, attachment_store);
//! let entry = service.create_entry(submission).await?;
//! let newest_first = service.list_entries().await?;
//! ```

pub mod guestbook_service;

pub use guestbook_service::GuestbookService;
