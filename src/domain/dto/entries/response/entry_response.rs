//! 방명록 응답 DTO
//!
//! 엔티티를 API 응답 형태(`camelCase` 키, RFC 3339 날짜)로 변환합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::entries::Entry;

/// 방명록 항목 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: String,
    pub name: String,
    pub text: String,
    pub mail: String,
    /// 첨부 이미지가 없으면 `null`
    pub image_url: Option<String>,
    /// RFC 3339 작성 시각
    pub date: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let date = DateTime::<Utc>::from_timestamp_millis(entry.date().timestamp_millis())
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();

        Self {
            id: entry.id_string().unwrap_or_default(),
            name: entry.name().to_string(),
            text: entry.text().to_string(),
            mail: entry.mail().to_string(),
            image_url: entry.image_url().map(str::to_string),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::entries::request::GuestbookSubmission;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_entry() {
        let (draft, _) = GuestbookSubmission::new("Arni", "Hasta la vista, baby", "test@mail.com", None)
            .into_valid()
            .unwrap()
            .into_parts();
        let id = ObjectId::new();
        let entry = Entry::new(draft, None).with_id(id);

        let response = EntryResponse::from(entry);
        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.name, "Arni");
        assert_eq!(response.image_url, None);
        assert!(DateTime::parse_from_rfc3339(&response.date).is_ok());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("imageUrl").unwrap().is_null());
    }
}
