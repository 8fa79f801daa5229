//! # Configuration Module
//!
//! 방명록 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 업로드 디렉터리, 방명록 저장소 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, UploadConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let root = UploadConfig::root_dir();
//! println!("{} 에서 실행, 업로드 경로: {}", bind, root.display());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 업로드 설정
//! export UPLOADS_DIR="uploads"
//! export UPLOAD_KEY_POLICY="original"   # original | unique
//! export UPLOAD_MAX_BYTES="10485760"
//!
//! # 저장소 설정
//! export ENTRY_STORE="mongodb"          # memory | mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="guestbook"
//! export SEED_ENTRIES="true"
//! ```

pub mod data_config;

pub use data_config::*;
