//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ### MongoDB 통합
//! - **BSON 직렬화**: `serde` 와 `bson` 을 통한 자동 변환
//! - **ObjectId 지원**: `_id` 필드와 매핑, 저장 시점에 부여
//! - **정렬**: `date` 내림차순 조회를 위한 인덱스 (`MongoEntryRepository::create_indexes`)

pub mod entries;
