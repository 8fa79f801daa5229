//! 방명록 응답 DTO 모듈

pub mod entry_response;

pub use entry_response::EntryResponse;
