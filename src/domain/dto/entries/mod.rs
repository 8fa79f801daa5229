//! 방명록 관련 DTO
//!
//! - [`request`] - 검증 전 제출 데이터와 첨부 파일
//! - [`response`] - API 응답 형태

pub mod request;
pub mod response;
