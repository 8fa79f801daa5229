//! 업로드 파일 관리 서비스 모듈
//!
//! - [`uploads_dir`] - 업로드 루트 디렉터리의 생성과 종료 시 정리
//! - [`attachment_store`] - 첨부 이미지 기록과 URL 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::StorageKeyPolicy;
//! use crate::services::uploads::{AttachmentStore, UploadsDirectory};
//!
//! let guard = UploadsDirectory::acquire("uploads", "/uploads")?;
//! let store = AttachmentStore::new(guard.directory(), StorageKeyPolicy::OriginalName);
//! let url = store.store(attachment)?;      // Some("/uploads/cat.png")
//! guard.shutdown();                        // 정상 종료 시 정리
//! ```

pub mod attachment_store;
pub mod uploads_dir;

pub use attachment_store::AttachmentStore;
pub use uploads_dir::{CleanupReport, UploadsDirectory, UploadsGuard};
