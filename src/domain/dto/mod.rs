//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 역할 | 타입 |
//! |------|------|
//! | multipart 폼 → 제출 데이터 | [`entries::request::GuestbookSubmission`] |
//! | 첨부 이미지 | [`entries::request::Attachment`] |
//! | 응답 본문 | [`entries::response::EntryResponse`] |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── entries/
//!     ├── request/     # 요청 DTO (클라이언트 → 서버)
//!     │   └── submission.rs
//!     └── response/    # 응답 DTO (서버 → 클라이언트)
//!         └── entry_response.rs
//! ```

pub mod entries;

