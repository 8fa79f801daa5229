//! # 문자열 유틸리티
//!
//! 폼 입력 처리에 쓰이는 문자열 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 누락된 폼 필드를 빈 문자열로 바꿉니다.
///
/// 값이 있으면 공백을 포함해 그대로 돌려줍니다. 필수 여부 판단은 검증 단계에서 합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::value_or_empty;
///
/// assert_eq!(value_or_empty(Some("  Arni ".to_string())), "  Arni ");
/// assert_eq!(value_or_empty(None), "");
/// ```
pub fn value_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}
