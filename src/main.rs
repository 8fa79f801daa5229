//! 방명록 서비스 메인 애플리케이션
//!
//! 업로드 디렉터리와 방명록 저장소를 준비한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 서버가 정상 종료되면 업로드 디렉터리를 정리합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use guestbook_backend::config::{EntryStoreKind, ServerConfig, StoreConfig, UploadConfig};
use guestbook_backend::db::Database;
use guestbook_backend::repositories::entries::{EntryRepository, InMemoryEntryRepository, MongoEntryRepository};
use guestbook_backend::routes::configure_all_routes;
use guestbook_backend::services::guestbook::GuestbookService;
use guestbook_backend::services::uploads::{AttachmentStore, UploadsDirectory};
use guestbook_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 방명록 서비스 시작중...");

    // 업로드 디렉터리 준비
    print_step_start(1, "Preparing uploads directory");
    let uploads_guard = UploadsDirectory::acquire(UploadConfig::root_dir(), UploadConfig::url_prefix())
        .map_err(|e| {
            error!("업로드 디렉터리 생성 실패: {}", e);
            e
        })?;
    print_sub_task("Uploads", &uploads_guard.root().display().to_string());
    print_sub_task("Key policy", &format!("{:?}", UploadConfig::key_policy()));
    print_step_complete(1, "Uploads directory ready", 1);

    // 방명록 저장소 초기화
    print_step_start(2, "Initializing entry store");
    let repository = initialize_entry_store().await;
    print_step_complete(2, "Entry store ready", 1);

    let attachments = Arc::new(AttachmentStore::new(
        uploads_guard.directory(),
        UploadConfig::key_policy(),
    ));
    let service = web::Data::new(GuestbookService::new(repository, attachments));

    // 데모 데이터 등록
    if StoreConfig::seed_entries() {
        print_step_start(3, "Seeding demo entries");
        let seeded = service
            .seed_demo_entries()
            .await
            .expect("데모 방명록 등록 실패");
        print_step_complete(3, "Demo entries seeded", seeded);
    }

    print_boxed_title("GUESTBOOK READY");

    // HTTP 서버 시작
    let result = start_http_server(service, uploads_guard.directory()).await;

    info!("🧹 Server is shutting down. Clearing uploads directory...");
    uploads_guard.shutdown();

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 기본값 127.0.0.1:8080에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/entries
/// ```
async fn start_http_server(
    service: web::Data<GuestbookService>,
    uploads: Arc<UploadsDirectory>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let max_upload_bytes = UploadConfig::max_upload_bytes();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Entries: http://{}/api/v1/entries", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let uploads = Arc::clone(&uploads);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(move |cfg| configure_all_routes(cfg, &uploads, max_upload_bytes))
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr 로 직접 출력
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=guestbook_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정에 따라 방명록 저장소를 생성합니다
///
/// # Panics
///
/// * `ENTRY_STORE=mongodb` 이고 MongoDB 연결 또는 인덱스 생성에 실패한 경우
async fn initialize_entry_store() -> Arc<dyn EntryRepository> {
    match StoreConfig::kind() {
        EntryStoreKind::Memory => {
            print_sub_task("Entry store", "memory");
            Arc::new(InMemoryEntryRepository::new())
        }
        EntryStoreKind::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(
                Database::new()
                    .await
                    .expect("데이터베이스 연결 실패")
            );
            let repository = MongoEntryRepository::new(database);
            repository
                .create_indexes()
                .await
                .expect("방명록 인덱스 생성 실패");

            print_sub_task("Entry store", "mongodb");
            Arc::new(repository)
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
