//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 서비스 호출로 바꾸고 결과를 JSON 응답으로 돌려주는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser / API Client
//! └─────────────────────┬───────────────────────┘
//!                       │ multipart/form-data, JSON
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   GuestbookService - 검증, 첨부 저장, 생성         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   EntryRepository - 방명록 저장/조회              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `main` 에서 한 번 생성되어 `web::Data` 로 등록되고, 핸들러는 추출자로 받습니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_entries(
//!     service: web::Data<GuestbookService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let entries = service.list_entries().await?;
//!     Ok(HttpResponse::Ok().json(entries))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>` 를 반환하며,
//! `AppError` 의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
//!
//! ## 모듈 구성
//!
//! - **`entries`**: 방명록 엔드포인트
//!   - 목록 조회 (`GET /api/v1/entries`)
//!   - 제출 (`POST /api/v1/entries`)

pub mod entries;
