//! # Domain Layer Module
//!
//! 방명록의 도메인 계층입니다. 원본 입력, 검증된 초안, 영속 엔티티가
//! 서로 다른 타입으로 분리되어 있어 상태 전이가 타입으로 드러납니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs       - GuestbookSubmission / Attachment (요청), EntryResponse (응답)
//! └── Entities   - Entry (MongoDB 문서와 1:1 대응)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Uploads Directory)
//! ```
//!
//! ## 상태 전이
//!
//! ```text
//! GuestbookSubmission ──검증──▶ EntryDraft + Option<Attachment>
//!                                   │             │
//!                                   │             └──▶ AttachmentStore ──▶ Option<image_url>
//!                                   ▼
//!                     Entry::new(draft, image_url) ──▶ EntryRepository::save
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 영속 엔티티
//!
//! - **불변성**: 생성 후 필드가 바뀌지 않음 (읽기 전용 접근자만 제공)
//! - **식별성**: `_id` 는 저장소가 부여
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! - **요청**: 잘못된 입력도 담을 수 있는 제출 객체, `validator` 로 필드 검증
//! - **응답**: JSON 응답 형태 (`camelCase`, RFC 3339 날짜)

pub mod entities;
pub mod dto;

