//! 방명록 요청 DTO 모듈

pub mod submission;

pub use submission::{Attachment, EntryDraft, GuestbookSubmission, ValidSubmission};
