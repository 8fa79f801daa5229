//! # Guestbook Entry HTTP Handlers
//!
//! 방명록 목록 조회와 새 방명록 제출을 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/entries` | 최신순 방명록 목록 | 200 OK |
//! | `POST` | `/api/v1/entries` | 방명록 제출 (multipart) | 201 Created / 400 Bad Request |
//!
//! ## 제출 형식
//!
//! `multipart/form-data` 로 `name`, `text`, `mail` 텍스트 필드와 선택적 `image` 파일을 받습니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/entries \
//!   -F name=Arni \
//!   -F "text=Hasta la vista, baby" \
//!   -F mail=test@mail.com \
//!   -F image=@cat.png
//! ```
//!
//! 필수 필드가 비어 있으면 필드별 오류를 담은 400 응답을 돌려줍니다.
//!
//! ```json
//! {
//!   "error": "Invalid submission: name은(는) 필수입니다",
//!   "fields": { "name": ["name은(는) 필수입니다"] }
//! }
//! ```

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, get, post, web};

use crate::domain::dto::entries::request::{Attachment, GuestbookSubmission};
use crate::domain::dto::entries::response::EntryResponse;
use crate::errors::{AppError, ErrorContext};
use crate::services::guestbook::GuestbookService;
use crate::utils::string_utils::value_or_empty;

/// 방명록 제출 multipart 폼
///
/// 누락된 텍스트 필드는 빈 문자열로 취급하여 검증 단계에서 필수 필드 오류로 보고됩니다.
#[derive(MultipartForm)]
pub struct GuestbookUploadForm {
    pub name: Option<Text<String>>,
    pub text: Option<Text<String>>,
    pub mail: Option<Text<String>>,
    pub image: Option<TempFile>,
}

impl GuestbookUploadForm {
    /// 폼 데이터를 제출 데이터로 변환합니다.
    ///
    /// 임시 파일을 읽으므로 blocking 스레드에서 호출해야 합니다.
    pub fn into_submission(self) -> Result<GuestbookSubmission, AppError> {
        let image = match self.image {
            Some(file) => read_attachment(file)?,
            None => None,
        };

        Ok(GuestbookSubmission::new(
            value_or_empty(self.name.map(|t| t.0)),
            value_or_empty(self.text.map(|t| t.0)),
            value_or_empty(self.mail.map(|t| t.0)),
            image,
        ))
    }
}

/// 파일명이 없거나 내용이 비어 있는 파일 파트는 첨부 없음으로 처리합니다.
///
/// 파일명은 클라이언트가 보낸 그대로 사용합니다.
fn read_attachment(file: TempFile) -> Result<Option<Attachment>, AppError> {
    let Some(file_name) = file
        .file_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
    else {
        return Ok(None);
    };
    if file.size == 0 {
        return Ok(None);
    }

    let bytes = std::fs::read(file.file.path()).context("업로드 임시 파일 읽기 실패")?;
    Ok(Some(Attachment::new(file_name, bytes)))
}

/// 최신순 방명록 목록 조회
///
/// 목록이 비어 있으면 빈 배열을 반환합니다.
#[get("")]
pub async fn list_entries(
    service: web::Data<GuestbookService>,
) -> Result<HttpResponse, AppError> {
    let entries = service.list_entries().await?;
    let body: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// 새 방명록 제출
#[post("")]
pub async fn create_entry(
    service: web::Data<GuestbookService>,
    MultipartForm(form): MultipartForm<GuestbookUploadForm>,
) -> Result<HttpResponse, AppError> {
    let submission = web::block(move || form.into_submission())
        .await
        .context("업로드 폼 처리 작업 실패")??;

    let entry = service.create_entry(submission).await?;

    Ok(HttpResponse::Created().json(EntryResponse::from(entry)))
}
