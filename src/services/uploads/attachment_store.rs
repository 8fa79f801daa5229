//! # 첨부 이미지 저장소
//!
//! 업로드된 이미지를 업로드 루트 아래에 기록하고 렌더링 계층이 사용할 상대 URL 을 돌려줍니다.
//!
//! ## 저장 키 정책
//!
//! | 정책 | 파일 경로 | URL |
//! |------|-----------|-----|
//! | `OriginalName` (기본값) | `<root>/<원본 파일명>` | `/uploads/<원본 파일명>` |
//! | `Unique` (강화 모드) | `<root>/<uuid>.<확장자>` | `/uploads/<uuid>.<확장자>` |
//!
//! 기본 정책은 원본 파일명을 가공 없이 사용하므로, 같은 이름의 업로드는 서로 덮어쓰고
//! (`..` 같은) 경로 구분자가 포함된 파일명도 걸러지지 않습니다. 동시에 같은 이름으로 기록하면
//! 마지막에 기록한 쪽이 남습니다. 이 동작이 문제가 되는 배포에서는 `UPLOAD_KEY_POLICY=unique` 를 사용합니다.
//!
//! ## 실패 처리
//!
//! 기록은 한 번만 시도하며 재시도하지 않습니다. I/O 실패는 [`StorageError::StorageFailure`] 로
//! 반환되고, 호출자는 이를 "저장된 첨부 없음"으로 처리합니다.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::config::StorageKeyPolicy;
use crate::domain::dto::entries::request::Attachment;
use crate::errors::StorageError;
use crate::services::uploads::UploadsDirectory;

/// 파일시스템 기반 첨부 저장소
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    uploads: Arc<UploadsDirectory>,
    key_policy: StorageKeyPolicy,
}

impl AttachmentStore {
    pub fn new(uploads: Arc<UploadsDirectory>, key_policy: StorageKeyPolicy) -> Self {
        Self { uploads, key_policy }
    }

    #[cfg(test)]
    fn uploads(&self) -> &UploadsDirectory {
        &self.uploads
    }

    /// 첨부를 기록하고 상대 URL 을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(url))` - 기록 성공
    /// * `Ok(None)` - 바이트나 파일명이 비어 있음 (첨부 없음, 기록하지 않음)
    /// * `Err(StorageError::StorageFailure)` - 기록 중 I/O 실패
    pub fn store(&self, attachment: Attachment) -> Result<Option<String>, StorageError> {
        if attachment.is_empty() {
            return Ok(None);
        }

        let key = self.storage_key(attachment.file_name());
        let path = self.uploads.path_for(&key);
        let (_, bytes) = attachment.into_parts();

        fs::write(&path, &bytes).map_err(|source| StorageError::StorageFailure {
            key: key.clone(),
            source,
        })?;

        debug!("🖼️ 첨부 저장: {} ({} bytes)", path.display(), bytes.len());
        Ok(Some(self.uploads.url_for(&key)))
    }

    fn storage_key(&self, original_name: &str) -> String {
        match self.key_policy {
            StorageKeyPolicy::OriginalName => original_name.to_string(),
            StorageKeyPolicy::Unique => unique_key(original_name),
        }
    }
}

/// UUID v4 키. 원본 확장자가 영숫자로만 되어 있으면 소문자로 붙입니다.
fn unique_key(original_name: &str) -> String {
    let id = Uuid::new_v4();

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{}.{}", id, ext.to_ascii_lowercase()),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path, policy: StorageKeyPolicy) -> AttachmentStore {
        let uploads = Arc::new(UploadsDirectory::new(dir.join("uploads"), "/uploads"));
        uploads.initialize().unwrap();
        AttachmentStore::new(uploads, policy)
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_store_round_trips_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), StorageKeyPolicy::OriginalName);
        let bytes = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 255];

        let url = store.store(Attachment::new("cat.png", bytes.clone())).unwrap();

        assert_eq!(url.as_deref(), Some("/uploads/cat.png"));
        assert_eq!(fs::read(store.uploads().root().join("cat.png")).unwrap(), bytes);
        assert_eq!(file_count(store.uploads().root()), 1);
    }

    #[test]
    fn test_empty_attachment_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), StorageKeyPolicy::OriginalName);

        assert_eq!(store.store(Attachment::new("cat.png", vec![])).unwrap(), None);
        assert_eq!(store.store(Attachment::new("", vec![1, 2, 3])).unwrap(), None);
        assert_eq!(file_count(store.uploads().root()), 0);
    }

    #[test]
    fn test_same_name_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), StorageKeyPolicy::OriginalName);

        store.store(Attachment::new("cat.png", b"first".to_vec())).unwrap();
        store.store(Attachment::new("cat.png", b"second".to_vec())).unwrap();

        assert_eq!(file_count(store.uploads().root()), 1);
        assert_eq!(fs::read(store.uploads().root().join("cat.png")).unwrap(), b"second");
    }

    #[test]
    fn test_write_failure_is_storage_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), StorageKeyPolicy::OriginalName);

        // 하위 디렉터리는 만들어 주지 않음
        let result = store.store(Attachment::new("missing/cat.png", b"meow".to_vec()));

        match result {
            Err(StorageError::StorageFailure { key, .. }) => assert_eq!(key, "missing/cat.png"),
            other => panic!("expected StorageFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_unique_policy_keeps_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), StorageKeyPolicy::Unique);

        let first = store.store(Attachment::new("cat.PNG", b"one".to_vec())).unwrap().unwrap();
        let second = store.store(Attachment::new("cat.PNG", b"two".to_vec())).unwrap().unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("/uploads/"));
        assert!(first.ends_with(".png"));
        assert_eq!(file_count(store.uploads().root()), 2);
    }

    #[test]
    fn test_unique_key_drops_traversal() {
        let key = unique_key("../../etc/passwd");
        assert!(!key.contains('/'));
        assert!(Uuid::parse_str(&key).is_ok());
    }
}
