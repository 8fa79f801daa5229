//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 방명록 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 에러는 세 갈래로 나뉩니다.
//!
//! - [`FieldViolation`] - 사용자가 고칠 수 있는 입력 오류. 400 응답으로 되돌려줍니다.
//! - [`StorageError`] - 첨부 이미지 저장 실패. 로그만 남기고 이미지 없이 방명록을 저장합니다.
//! - [`CleanupError`] - 종료 시 업로드 디렉터리 정리 실패. 항목별로 로그만 남깁니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn list(repo: &dyn EntryRepository) -> Result<Vec<Entry>, AppError> {
//!     repo.find_all_by_order_by_date_desc().await
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// 방명록 제출 폼의 필수 입력 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestbookField {
    Name,
    Text,
    Mail,
}

impl GuestbookField {
    /// 폼 필드 이름 (`name`, `text`, `mail`)
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestbookField::Name => "name",
            GuestbookField::Text => "text",
            GuestbookField::Mail => "mail",
        }
    }

    /// 폼 필드 이름으로부터 필드를 찾습니다.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(GuestbookField::Name),
            "text" => Some(GuestbookField::Text),
            "mail" => Some(GuestbookField::Mail),
            _ => None,
        }
    }
}

impl fmt::Display for GuestbookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 필드 단위 입력 검증 위반
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// 필수 필드가 없거나 공백으로만 이루어짐
    #[error("{0}은(는) 필수입니다")]
    RequiredFieldMissing(GuestbookField),
}

impl FieldViolation {
    /// 위반이 발생한 필드
    pub fn field(&self) -> GuestbookField {
        match self {
            FieldViolation::RequiredFieldMissing(field) => *field,
        }
    }
}

/// 첨부 파일 저장 에러
///
/// 호출자는 이 에러를 치명적인 에러로 전파하지 않습니다.
/// 로그를 남긴 뒤 "저장된 첨부 없음"으로 처리합니다.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("첨부 파일 저장 실패 ({key}): {source}")]
    StorageFailure {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// 업로드 디렉터리 정리 에러 (항목 단위, 치명적이지 않음)
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("업로드 디렉터리 항목 삭제 실패 ({}): {source}", path.display())]
    DirectoryCleanupFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 방명록 제출 필드 검증 실패 (400 Bad Request, 필드별 메시지 포함)
    #[error("Invalid submission: {}", join_violations(.0))]
    InvalidSubmission(Vec<FieldViolation>),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidSubmission(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        let body = match self {
            AppError::InvalidSubmission(violations) => {
                let mut fields: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
                for violation in violations {
                    fields
                        .entry(violation.field().as_str())
                        .or_default()
                        .push(violation.to_string());
                }
                serde_json::json!({
                    "error": self.to_string(),
                    "fields": fields,
                })
            }
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
