//! # 방명록 서비스 구현
//!
//! 방명록 제출의 전체 흐름을 담당합니다.
//!
//! ```text
//! GuestbookSubmission
//!        │ into_valid()
//!        ├──▶ 실패: AppError::InvalidSubmission (저장·기록 없음)
//!        ▼
//! EntryDraft + Option<Attachment>
//!        │               │ AttachmentStore::store (blocking pool)
//!        │               ├──▶ 성공: Some("/uploads/<key>")
//!        │               └──▶ 실패: 경고 로그 후 None (제출은 계속 진행)
//!        ▼
//! Entry::new(draft, image_url) ──▶ EntryRepository::save ──▶ 식별자가 부여된 Entry
//! ```
//!
//! 이미지 저장 실패 때문에 메시지가 사라지지 않도록, 첨부 저장 실패는 제출 실패로 이어지지 않습니다.

use std::sync::Arc;

use actix_web::web;
use log::{debug, info, warn};

use crate::domain::dto::entries::request::{Attachment, GuestbookSubmission};
use crate::domain::entities::entries::Entry;
use crate::errors::AppError;
use crate::repositories::entries::EntryRepository;
use crate::services::uploads::AttachmentStore;

/// 시작 시 등록되는 데모 방명록 (이름, 본문)
const DEMO_ENTRIES: [(&str, &str); 4] = [
    ("H4xx0r", "first!!!"),
    ("Arni", "Hasta la vista, baby"),
    ("Duke Nukem", "It's time to kick ass and chew bubble gum. And I'm all out of gum."),
    ("Gump1337", "Mama always said life was like a box of chocolates. You never know what you're gonna get."),
];

const DEMO_MAIL: &str = "test@mail.com";

/// 방명록 비즈니스 로직 서비스
///
/// 요청 간에 공유되는 상태는 저장소 핸들뿐이며, 제출마다 독립적으로 처리됩니다.
pub struct GuestbookService {
    repository: Arc<dyn EntryRepository>,
    attachments: Arc<AttachmentStore>,
}

impl GuestbookService {
    pub fn new(repository: Arc<dyn EntryRepository>, attachments: Arc<AttachmentStore>) -> Self {
        Self {
            repository,
            attachments,
        }
    }

    /// 제출 데이터를 검증하고 새 방명록 항목으로 변환합니다.
    ///
    /// 검증에 실패하면 첨부를 기록하지 않습니다.
    /// 첨부가 있으면 최대 한 번 기록하며, 실패하면 `image_url` 이 없는 항목을 만듭니다.
    pub async fn prepare_entry(&self, submission: GuestbookSubmission) -> Result<Entry, AppError> {
        let valid = submission.into_valid().map_err(|violations| {
            debug!("방명록 제출 검증 실패: {:?}", violations);
            AppError::InvalidSubmission(violations)
        })?;

        let (draft, image) = valid.into_parts();

        let image_url = match image {
            Some(attachment) => self.store_attachment(attachment).await,
            None => None,
        };

        Ok(Entry::new(draft, image_url))
    }

    /// 제출 데이터로 방명록 항목을 만들어 저장합니다.
    pub async fn create_entry(&self, submission: GuestbookSubmission) -> Result<Entry, AppError> {
        let entry = self.prepare_entry(submission).await?;
        let saved = self.repository.save(entry).await?;

        info!(
            "✍️ 새 방명록 저장: {} (이미지: {})",
            saved.id_string().unwrap_or_default(),
            saved.image_url().unwrap_or("없음")
        );

        Ok(saved)
    }

    /// 최신순 방명록 목록
    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        self.repository.find_all_by_order_by_date_desc().await
    }

    /// 저장소가 비어 있으면 데모 방명록 네 건을 등록하고 등록된 수를 반환합니다.
    ///
    /// 이미 항목이 있으면 (재시작된 MongoDB 저장소 등) 아무것도 등록하지 않고 0 을 반환합니다.
    pub async fn seed_demo_entries(&self) -> Result<usize, AppError> {
        if !self.list_entries().await?.is_empty() {
            info!("기존 방명록이 있어 데모 데이터 등록을 건너뜁니다");
            return Ok(0);
        }

        for (name, text) in DEMO_ENTRIES {
            self.create_entry(GuestbookSubmission::new(name, text, DEMO_MAIL, None))
                .await?;
        }
        Ok(DEMO_ENTRIES.len())
    }

    async fn store_attachment(&self, attachment: Attachment) -> Option<String> {
        if attachment.is_empty() {
            return None;
        }

        let store = Arc::clone(&self.attachments);
        match web::block(move || store.store(attachment)).await {
            Ok(Ok(url)) => url,
            Ok(Err(e)) => {
                warn!("⚠️ {} - 이미지 없이 방명록을 저장합니다", e);
                None
            }
            Err(e) => {
                warn!("⚠️ 첨부 저장 작업 실행 실패: {} - 이미지 없이 방명록을 저장합니다", e);
                None
            }
        }
    }
}
