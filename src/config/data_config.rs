//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 업로드 디렉터리, 방명록 저장소 관련 설정을 관리합니다.

use std::env;
use std::path::PathBuf;

/// 업로드 파일이 노출되는 고정 URL 접두사
///
/// 첨부 저장소가 만드는 URL과 정적 파일 라우트가 반드시 같은 값을 사용해야 합니다.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// 업로드 디렉터리 기본 경로 (작업 디렉터리 기준)
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 첨부 파일 저장 키 생성 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKeyPolicy {
    /// 제출된 원본 파일명을 그대로 키로 사용 (기본값)
    ///
    /// 같은 이름의 파일은 덮어쓰이고, 경로 구분자가 들어간 파일명도 걸러내지 않습니다.
    OriginalName,
    /// 강화 모드: UUID v4 기반 키에 원본 확장자만 유지
    Unique,
}

impl StorageKeyPolicy {
    /// 문자열에서 정책을 생성합니다. 알 수 없는 값은 `OriginalName`으로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "unique" | "hardened" | "uuid" => StorageKeyPolicy::Unique,
            _ => StorageKeyPolicy::OriginalName,
        }
    }
}

/// 업로드 관련 설정
pub struct UploadConfig;

impl UploadConfig {
    /// 업로드 루트 디렉터리
    ///
    /// - `UPLOADS_DIR`: 기본값 `uploads`
    pub fn root_dir() -> PathBuf {
        env::var("UPLOADS_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR))
    }

    /// 업로드 URL 접두사 (`/uploads`, 변경 불가)
    pub fn url_prefix() -> &'static str {
        UPLOADS_URL_PREFIX
    }

    /// 저장 키 정책
    ///
    /// - `UPLOAD_KEY_POLICY`: `original` (기본값) 또는 `unique`
    pub fn key_policy() -> StorageKeyPolicy {
        env::var("UPLOAD_KEY_POLICY")
            .map(|v| StorageKeyPolicy::from_str(&v))
            .unwrap_or(StorageKeyPolicy::OriginalName)
    }

    /// multipart 요청 전체 크기 제한 (바이트)
    ///
    /// - `UPLOAD_MAX_BYTES`: 기본값 10 MiB
    pub fn max_upload_bytes() -> usize {
        env::var("UPLOAD_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10 * 1024 * 1024)
    }
}

/// 방명록 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStoreKind {
    /// 프로세스 메모리 (재시작 시 초기화)
    Memory,
    /// MongoDB `entries` 컬렉션
    MongoDb,
}

impl EntryStoreKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => EntryStoreKind::MongoDb,
            _ => EntryStoreKind::Memory,
        }
    }
}

/// 방명록 저장소 설정
pub struct StoreConfig;

impl StoreConfig {
    /// - `ENTRY_STORE`: `memory` (기본값) 또는 `mongodb`
    pub fn kind() -> EntryStoreKind {
        env::var("ENTRY_STORE")
            .map(|v| EntryStoreKind::from_str(&v))
            .unwrap_or(EntryStoreKind::Memory)
    }

    /// 시작 시 데모 방명록 등록 여부
    ///
    /// - `SEED_ENTRIES`: 기본값 `true`
    pub fn seed_entries() -> bool {
        env::var("SEED_ENTRIES")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_policy_from_string() {
        assert_eq!(StorageKeyPolicy::from_str("original"), StorageKeyPolicy::OriginalName);
        assert_eq!(StorageKeyPolicy::from_str("UNIQUE"), StorageKeyPolicy::Unique);
        assert_eq!(StorageKeyPolicy::from_str(" hardened "), StorageKeyPolicy::Unique);
        assert_eq!(StorageKeyPolicy::from_str("whatever"), StorageKeyPolicy::OriginalName);
    }

    #[test]
    fn test_store_kind_from_string() {
        assert_eq!(EntryStoreKind::from_str("mongodb"), EntryStoreKind::MongoDb);
        assert_eq!(EntryStoreKind::from_str("Mongo"), EntryStoreKind::MongoDb);
        assert_eq!(EntryStoreKind::from_str("memory"), EntryStoreKind::Memory);
        assert_eq!(EntryStoreKind::from_str(""), EntryStoreKind::Memory);
    }

    #[test]
    fn test_url_prefix_is_fixed() {
        assert_eq!(UploadConfig::url_prefix(), "/uploads");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("UPLOADS_DIR").is_err() {
            assert_eq!(UploadConfig::root_dir(), PathBuf::from("uploads"));
        }
    }
}
