//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 폼 입력 문자열 검사와 정리
//! - [`display_terminal`] - 기동 과정 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::is_valid_string;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(!is_valid_string("   "));
//! print_boxed_title("GUESTBOOK READY");
//! ```

pub mod string_utils;
pub mod display_terminal;
