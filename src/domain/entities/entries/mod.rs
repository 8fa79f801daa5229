//! 방명록 도메인 엔티티 모듈
//!
//! - [`entry::Entry`] - 영속화된 방명록 항목

pub mod entry;

pub use entry::Entry;
