//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main` 에서 한 번 만들어 `web::Data` 로 핸들러에 주입합니다.
//!
//! # Features
//!
//! - 방명록 제출 검증과 항목 생성 ([`guestbook`])
//! - 첨부 이미지 저장과 업로드 디렉터리 생명주기 ([`uploads`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{guestbook::GuestbookService, uploads::AttachmentStore};
//!
//! let store = Arc::new(AttachmentStore::new(uploads.directory(), key_policy));
//! let service = GuestbookService::new(repository, store);
//! ```

pub mod guestbook;
pub mod uploads;
