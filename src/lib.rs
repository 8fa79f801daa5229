//! 방명록 서비스 백엔드
//!
//! 방문자가 이름, 메시지, 메일 주소와 선택적인 이미지를 남기는 방명록 서비스입니다.
//!
//! # Features
//!
//! - **방명록 제출**: 필수 필드 검증 후 새 항목 생성, 필드별 오류 보고
//! - **첨부 이미지**: 업로드 디렉터리에 저장하고 `/uploads/<파일명>` 으로 제공
//! - **업로드 디렉터리 생명주기**: 기동 시 생성, 정상 종료 시 정리
//! - **저장소**: 메모리(기본값) 또는 MongoDB
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, /uploads 정적 파일
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← multipart 폼 처리, JSON 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 제출 검증, 첨부 저장, 항목 생성
//! └─────────────────┘
//!          │                 │
//!          ▼                 ▼
//! ┌─────────────────┐ ┌─────────────────┐
//! │  Repositories   │ │ Uploads 디렉터리 │
//! └─────────────────┘ └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory / MongoDB│
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use guestbook_backend::config::StorageKeyPolicy;
//! use guestbook_backend::domain::dto::entries::request::GuestbookSubmission;
//! use guestbook_backend::repositories::entries::InMemoryEntryRepository;
//! use guestbook_backend::services::guestbook::GuestbookService;
//! use guestbook_backend::services::uploads::{AttachmentStore, UploadsDirectory};
//!
//! let guard = UploadsDirectory::acquire("uploads", "/uploads")?;
//! let store = Arc::new(AttachmentStore::new(guard.directory(), StorageKeyPolicy::OriginalName));
//! let service = GuestbookService::new(Arc::new(InMemoryEntryRepository::new()), store);
//!
//! let entry = service
//!     .create_entry(GuestbookSubmission::new("Arni", "Hasta la vista, baby", "test@mail.com", None))
//!     .await?;
//!
//! guard.shutdown();
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
