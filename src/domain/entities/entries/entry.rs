//! Guestbook Entry Entity
//!
//! 영속화된 방명록 항목입니다. 생성 이후에는 변경되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::dto::entries::request::EntryDraft;

/// 방명록 항목 엔티티
///
/// `id` 는 영속화 계층이 부여하며, 이 크레이트의 코어 로직은 직접 만들지 않습니다.
/// 필드는 비공개이고 읽기 전용 접근자만 제공합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    /// 작성자 이름
    name: String,
    /// 본문
    text: String,
    /// 연락용 이메일
    mail: String,
    /// 저장된 첨부 이미지의 상대 URL (`/uploads/<key>`)
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// 작성 시각
    date: DateTime,
}

impl Entry {
    /// 검증된 초안으로부터 새 방명록 항목을 만듭니다.
    ///
    /// 작성 시각은 지금으로 설정되고, `id` 는 저장 전까지 비어 있습니다.
    pub fn new(draft: EntryDraft, image_url: Option<String>) -> Self {
        let (name, text, mail) = draft.into_fields();

        Self {
            id: None,
            name,
            text,
            mail,
            image_url,
            date: DateTime::now(),
        }
    }

    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mail(&self) -> &str {
        &self.mail
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn date(&self) -> DateTime {
        self.date
    }

    /// 영속화 계층이 식별자를 부여한 사본을 반환합니다.
    pub(crate) fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_date(mut self, date: DateTime) -> Self {
        self.date = date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::entries::request::GuestbookSubmission;

    fn draft(name: &str) -> EntryDraft {
        let (draft, _) = GuestbookSubmission::new(name, "text", "test@mail.com", None)
            .into_valid()
            .unwrap()
            .into_parts();
        draft
    }

    #[test]
    fn test_new_entry_has_no_id() {
        let entry = Entry::new(draft("Arni"), None);

        assert_eq!(entry.id(), None);
        assert_eq!(entry.name(), "Arni");
        assert_eq!(entry.image_url(), None);
    }

    #[test]
    fn test_image_url_is_kept() {
        let entry = Entry::new(draft("Arni"), Some("/uploads/cat.png".to_string()));
        assert_eq!(entry.image_url(), Some("/uploads/cat.png"));
    }

    #[test]
    fn test_bson_field_names() {
        let entry = Entry::new(draft("Arni"), Some("/uploads/cat.png".to_string()));
        let document = mongodb::bson::to_document(&entry).unwrap();

        assert!(document.get("_id").is_none());
        assert_eq!(document.get_str("imageUrl").unwrap(), "/uploads/cat.png");
        assert!(document.get_datetime("date").is_ok());
    }
}
