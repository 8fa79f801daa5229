//! # 방명록 제출 요청 DTO
//!
//! 방문자가 보낸 원본 폼 데이터(`name`, `text`, `mail`, 선택적 `image`)를 담는
//! 요청 범위의 임시 객체입니다. [`Entry`](crate::domain::entities::entries::Entry)와 달리
//! 잘못된 입력도 그대로 담을 수 있도록 설계되어, 검증 결과를 필드 단위로 되돌려줄 수 있습니다.
//!
//! ## 검증 규칙
//!
//! - `name`, `text`, `mail` 은 비어 있거나 공백으로만 이루어질 수 없습니다.
//! - `mail` 의 형식은 검사하지 않습니다.
//! - 첨부 이미지는 선택 사항이며, 바이트나 파일명이 비어 있으면 첨부가 없는 것으로 봅니다.
//!
//! ## 변환 흐름
//!
//! ```text
//! GuestbookSubmission ──into_valid()──▶ ValidSubmission ──into_parts()──▶ (EntryDraft, Option<Attachment>)
//!          │                                                                  │
//!          └──▶ Vec<FieldViolation> (검증 실패)                                 └──▶ Entry::new(draft, image_url)
//! ```
//!
//! [`EntryDraft`] 는 이 모듈에서만 생성할 수 있으므로, 검증을 거치지 않은 `Entry` 는 존재할 수 없습니다.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::{FieldViolation, GuestbookField};
use crate::utils::string_utils::is_valid_string;

/// 업로드된 첨부 파일 (원본 파일명 + 바이트)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// 클라이언트가 보낸 원본 파일명
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 바이트나 파일명이 비어 있으면 "첨부 없음"과 구분되지 않습니다.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() || self.file_name.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.file_name, self.bytes)
    }
}

/// 검증 전 방명록 제출 데이터
#[derive(Debug, Clone, Default, Validate)]
pub struct GuestbookSubmission {
    /// 작성자 표시 이름
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 본문
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,

    /// 연락용 이메일 (형식 검사 없음)
    #[validate(custom(function = "validate_not_blank"))]
    pub mail: String,

    /// 선택적 첨부 이미지
    pub image: Option<Attachment>,
}

impl GuestbookSubmission {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        mail: impl Into<String>,
        image: Option<Attachment>,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            mail: mail.into(),
            image,
        }
    }

    /// 필수 필드를 검증하고 검증된 제출 데이터로 변환합니다.
    ///
    /// 실패 시 위반한 모든 필드를 `name`, `text`, `mail` 순서로 반환합니다.
    /// 제출 데이터는 소비되므로 두 번 변환될 수 없습니다.
    pub fn into_valid(self) -> Result<ValidSubmission, Vec<FieldViolation>> {
        if let Err(errors) = self.validate() {
            return Err(violations_from(&errors));
        }

        Ok(ValidSubmission {
            draft: EntryDraft {
                name: self.name,
                text: self.text,
                mail: self.mail,
            },
            image: self.image,
        })
    }
}

/// 검증을 통과한 제출 데이터
#[derive(Debug)]
pub struct ValidSubmission {
    draft: EntryDraft,
    image: Option<Attachment>,
}

impl ValidSubmission {
    /// 방명록 초안과 첨부 파일로 분리합니다. 첨부는 저장소로 소유권이 넘어갑니다.
    pub fn into_parts(self) -> (EntryDraft, Option<Attachment>) {
        (self.draft, self.image)
    }
}

/// 검증된 필수 필드 묶음
///
/// 필드가 비공개이고 생성자가 없으므로 [`GuestbookSubmission::into_valid`] 로만 얻을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    name: String,
    text: String,
    mail: String,
}

impl EntryDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mail(&self) -> &str {
        &self.mail
    }

    pub(crate) fn into_fields(self) -> (String, String, String) {
        (self.name, self.text, self.mail)
    }
}

/// 공백으로만 이루어진 문자열 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}

fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .keys()
        .filter_map(|field| GuestbookField::from_name(field))
        .map(FieldViolation::RequiredFieldMissing)
        .collect();
    violations.sort_by_key(FieldViolation::field);
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(field: GuestbookField) -> FieldViolation {
        FieldViolation::RequiredFieldMissing(field)
    }

    #[test]
    fn test_valid_submission_keeps_fields_verbatim() {
        let submission = GuestbookSubmission::new("Arni", "Hasta la vista, baby", "test@mail.com", None);
        let (draft, image) = submission.into_valid().unwrap().into_parts();

        assert_eq!(draft.name(), "Arni");
        assert_eq!(draft.text(), "Hasta la vista, baby");
        assert_eq!(draft.mail(), "test@mail.com");
        assert!(image.is_none());
    }

    #[test]
    fn test_blank_fields_are_reported_in_order() {
        let submission = GuestbookSubmission::new("   ", "hello", "\t\n", None);
        let violations = submission.into_valid().unwrap_err();

        assert_eq!(violations, vec![missing(GuestbookField::Name), missing(GuestbookField::Mail)]);
    }

    #[test]
    fn test_absent_fields_are_all_reported() {
        let violations = GuestbookSubmission::default().into_valid().unwrap_err();

        assert_eq!(
            violations,
            vec![
                missing(GuestbookField::Name),
                missing(GuestbookField::Text),
                missing(GuestbookField::Mail),
            ]
        );
    }

    #[test]
    fn test_each_single_blank_field_is_rejected() {
        let cases = [
            (GuestbookSubmission::new("", "t", "m", None), GuestbookField::Name),
            (GuestbookSubmission::new("n", " ", "m", None), GuestbookField::Text),
            (GuestbookSubmission::new("n", "t", "", None), GuestbookField::Mail),
        ];

        for (submission, field) in cases {
            assert_eq!(submission.into_valid().unwrap_err(), vec![missing(field)]);
        }
    }

    #[test]
    fn test_mail_format_is_not_checked() {
        let submission = GuestbookSubmission::new("n", "t", "not-an-email", None);
        assert!(submission.into_valid().is_ok());
    }

    #[test]
    fn test_attachment_travels_with_valid_submission() {
        let image = Attachment::new("cat.png", vec![1, 2, 3]);
        let submission = GuestbookSubmission::new("n", "t", "m", Some(image.clone()));

        let (draft, attachment) = submission.into_valid().unwrap().into_parts();
        assert_eq!(draft.name(), "n");
        assert_eq!(attachment, Some(image));
    }

    #[test]
    fn test_attachment_emptiness() {
        assert!(Attachment::new("cat.png", vec![]).is_empty());
        assert!(Attachment::new("", vec![1]).is_empty());
        assert!(!Attachment::new("cat.png", vec![1]).is_empty());
    }
}
