//! API 라우트 설정 모듈
//!
//! 방명록 API, 업로드 파일 정적 제공, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /api/v1/entries` - 최신순 방명록 목록
//! - `POST /api/v1/entries` - 방명록 제출 (multipart)
//! - `GET /uploads/{file}` - 저장된 첨부 이미지
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let uploads = guard.directory();
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &uploads, max_upload_bytes));
//! ```

use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::services::uploads::UploadsDirectory;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `uploads` - 첨부 이미지를 제공할 업로드 디렉터리
/// * `max_upload_bytes` - multipart 요청 전체 크기 제한
pub fn configure_all_routes(
    cfg: &mut web::ServiceConfig,
    uploads: &UploadsDirectory,
    max_upload_bytes: usize,
) {
    // Health check endpoint
    cfg.service(health_check);

    configure_entry_routes(cfg, max_upload_bytes);
    configure_upload_routes(cfg, uploads);
}

/// 방명록 라우트를 설정합니다
///
/// ```bash
/// # 목록 조회
/// curl http://localhost:8080/api/v1/entries
///
/// # 제출
/// curl -X POST http://localhost:8080/api/v1/entries \
///   -F name=Arni -F "text=Hasta la vista, baby" -F mail=test@mail.com -F image=@cat.png
/// ```
fn configure_entry_routes(cfg: &mut web::ServiceConfig, max_upload_bytes: usize) {
    cfg.service(
        web::scope("/api/v1/entries")
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(max_upload_bytes)
                    .memory_limit(max_upload_bytes),
            )
            .service(handlers::entries::list_entries)
            .service(handlers::entries::create_entry),
    );
}

/// 저장된 첨부 이미지를 `/uploads` 아래에서 제공합니다
fn configure_upload_routes(cfg: &mut web::ServiceConfig, uploads: &UploadsDirectory) {
    cfg.service(Files::new(uploads.url_prefix(), uploads.root()));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "guestbook_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
