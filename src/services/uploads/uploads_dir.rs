//! # 업로드 디렉터리 생명주기
//!
//! 첨부 이미지가 저장되는 업로드 루트 디렉터리를 소유하는 핸들입니다.
//! 프로세스 전역 파일시스템 상태를 명시적인 값으로 다루기 위해,
//! 애플리케이션 초기화 시 한 번 만들어 [`AttachmentStore`](super::AttachmentStore)와
//! 정적 파일 라우트에 같은 `Arc<UploadsDirectory>` 를 넘겨줍니다.
//!
//! ## 생명주기
//!
//! ```text
//! 시작 ── UploadsDirectory::acquire() ── 루트가 없으면 생성 (멱등)
//!   │
//!   ▼
//! 실행 ── 요청마다 AttachmentStore 가 파일 기록, /uploads/** 로 정적 제공
//!   │
//!   ▼
//! 정상 종료 ── UploadsGuard::shutdown() 또는 Drop ── 가장 깊은 항목부터 전부 삭제, 루트도 삭제
//! ```
//!
//! 비정상 종료(패닉, 강제 종료)에서는 정리하지 않습니다.
//!
//! ## 정리 실패 처리
//!
//! 항목 하나를 지우지 못해도 나머지 항목 삭제는 계속됩니다.
//! 실패는 [`CleanupError::DirectoryCleanupFailure`] 로 로그에 남기고 [`CleanupReport`] 에 모읍니다.

use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use log::{error, info, warn};

use crate::errors::CleanupError;

/// 업로드 루트 디렉터리 핸들
#[derive(Debug, Clone)]
pub struct UploadsDirectory {
    root: PathBuf,
    url_prefix: String,
}

impl UploadsDirectory {
    /// 디렉터리를 만들지 않고 핸들만 생성합니다.
    ///
    /// `url_prefix` 끝의 `/` 는 제거됩니다 (`/uploads/` → `/uploads`).
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into();
        let url_prefix = url_prefix.trim_end_matches('/').to_string();

        Self {
            root: root.into(),
            url_prefix,
        }
    }

    /// 루트 디렉터리를 준비하고 종료 시 정리를 보장하는 가드를 반환합니다.
    pub fn acquire(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> io::Result<UploadsGuard> {
        let directory = Arc::new(Self::new(root, url_prefix));
        directory.initialize()?;

        Ok(UploadsGuard {
            directory,
            released: false,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 정적 파일 라우트의 마운트 경로이자 이미지 URL 접두사
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// 저장 키에 해당하는 파일시스템 경로
    ///
    /// 키는 가공하지 않고 루트 뒤에 이어 붙입니다. 선행 경로 구분자만 제거해
    /// 절대 경로처럼 보이는 키도 루트 아래에 머물게 합니다.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key.trim_start_matches(['/', '\\']))
    }

    /// 저장 키에 해당하는 상대 URL (`<prefix>/<key>`)
    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.url_prefix, key)
    }

    /// 루트 디렉터리가 없으면 생성합니다. 여러 번 호출해도 안전합니다.
    pub fn initialize(&self) -> io::Result<()> {
        if self.root.is_dir() {
            info!("📁 업로드 디렉터리 확인: {}", self.root.display());
            return Ok(());
        }

        fs::create_dir_all(&self.root)?;
        info!("📁 업로드 디렉터리 생성: {}", self.root.display());
        Ok(())
    }

    /// 루트 아래의 모든 파일과 하위 디렉터리를 가장 깊은 항목부터 삭제하고, 마지막으로 루트도 삭제합니다.
    ///
    /// 심볼릭 링크는 따라가지 않고 링크 자체만 삭제합니다.
    /// 루트가 없으면 아무 일도 하지 않습니다.
    pub fn clear(&self) -> CleanupReport {
        let mut report = CleanupReport::default();

        if fs::symlink_metadata(&self.root).is_err() {
            return report;
        }

        info!("🧹 업로드 디렉터리 정리 중: {}", self.root.display());

        let mut paths = vec![self.root.clone()];
        collect_entries(&self.root, &mut paths, &mut report);

        // 부모 경로는 자식 경로보다 앞에 정렬되므로, 뒤집으면 가장 깊은 항목이 먼저 옵니다.
        paths.sort();
        paths.reverse();
        remove_paths(paths, &mut report);

        if report.is_clean() {
            info!("✅ 업로드 디렉터리 정리 완료 ({}개 항목 삭제)", report.removed);
        } else {
            warn!(
                "⚠️ 업로드 디렉터리 정리 일부 실패 ({}개 삭제, {}개 실패)",
                report.removed,
                report.failures.len()
            );
        }

        report
    }
}

/// 디렉터리 정리 결과
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// 삭제된 항목 수 (루트 포함)
    pub removed: usize,
    /// 삭제하지 못한 항목
    pub failures: Vec<CleanupError>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, failure: CleanupError) {
        error!("❌ {}", failure);
        self.failures.push(failure);
    }
}

fn collect_entries(dir: &Path, out: &mut Vec<PathBuf>, report: &mut CleanupReport) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(source) => {
            report.record(CleanupError::DirectoryCleanupFailure {
                path: dir.to_path_buf(),
                source,
            });
            return;
        }
    };

    for entry in read_dir {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                // file_type() 은 심볼릭 링크를 따라가지 않음
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                if is_dir {
                    collect_entries(&path, out, report);
                }
                out.push(path);
            }
            Err(source) => report.record(CleanupError::DirectoryCleanupFailure {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

/// 주어진 순서대로 삭제합니다. 실패한 항목은 기록만 하고 다음 항목으로 넘어갑니다.
fn remove_paths(paths: Vec<PathBuf>, report: &mut CleanupReport) {
    for path in paths {
        match remove_entry(&path) {
            Ok(()) => report.removed += 1,
            Err(source) => report.record(CleanupError::DirectoryCleanupFailure { path, source }),
        }
    }
}

fn remove_entry(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// 업로드 디렉터리의 범위 기반 소유권
///
/// [`shutdown`](UploadsGuard::shutdown) 을 호출하거나 가드가 drop 될 때 디렉터리를 정리합니다.
/// 패닉으로 스택이 풀리는 중에는 정리하지 않습니다.
#[derive(Debug)]
pub struct UploadsGuard {
    directory: Arc<UploadsDirectory>,
    released: bool,
}

impl UploadsGuard {
    /// 저장소와 정적 파일 라우트에 넘겨줄 공유 핸들
    pub fn directory(&self) -> Arc<UploadsDirectory> {
        Arc::clone(&self.directory)
    }

    /// 정상 종료: 업로드 디렉터리를 정리하고 결과를 반환합니다.
    pub fn shutdown(mut self) -> CleanupReport {
        self.released = true;
        self.directory.clear()
    }
}

impl Deref for UploadsGuard {
    type Target = UploadsDirectory;

    fn deref(&self) -> &Self::Target {
        &self.directory
    }
}

impl Drop for UploadsGuard {
    fn drop(&mut self) {
        if self.released || thread::panicking() {
            return;
        }
        self.directory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_files(dir: &Path) -> usize {
        if !dir.exists() {
            return 0;
        }
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
            .sum()
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let uploads = UploadsDirectory::new(tmp.path().join("uploads"), "/uploads");

        uploads.initialize().unwrap();
        uploads.initialize().unwrap();

        assert!(uploads.root().is_dir());
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_initialize_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let uploads = UploadsDirectory::new(tmp.path().join("a/b/uploads"), "/uploads");

        uploads.initialize().unwrap();
        assert!(uploads.root().is_dir());
    }

    #[test]
    fn test_clear_removes_nested_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");
        let uploads = UploadsDirectory::new(&root, "/uploads");
        uploads.initialize().unwrap();

        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::create_dir_all(root.join("d")).unwrap();
        for file in ["top.png", "a/one.png", "a/b/two.png", "a/b/c/three.png", "d/four.png", "a.txt"] {
            fs::write(root.join(file), b"data").unwrap();
        }
        assert_eq!(count_files(&root), 6);

        let report = uploads.clear();

        assert!(report.is_clean());
        assert_eq!(count_files(&root), 0);
        assert!(!root.exists());
        // 파일 6개 + 하위 디렉터리 4개 + 루트
        assert_eq!(report.removed, 11);
    }

    #[test]
    fn test_failed_entry_does_not_stop_removal() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.png"), b"a").unwrap();
        fs::write(root.join("sub/b.png"), b"b").unwrap();
        fs::write(root.join("z.png"), b"z").unwrap();

        // 이미 사라진 항목은 사용자 권한과 관계없이 삭제에 실패함
        let vanished = root.join("m.png");
        let paths = vec![
            root.join("z.png"),
            root.join("sub/b.png"),
            vanished.clone(),
            root.join("sub"),
            root.join("a.png"),
        ];

        let mut report = CleanupReport::default();
        remove_paths(paths, &mut report);

        assert_eq!(report.removed, 4);
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0] {
            CleanupError::DirectoryCleanupFailure { path, .. } => assert_eq!(path, &vanished),
        }
        assert!(!root.join("z.png").exists());
        assert!(!root.join("sub").exists());
        assert!(!root.join("a.png").exists());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clear_missing_root_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let uploads = UploadsDirectory::new(tmp.path().join("never-created"), "/uploads");

        let report = uploads.clear();
        assert!(report.is_clean());
        assert_eq!(report.removed, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_does_not_follow_symlinks() {
        let tmp = tempfile::tempdir().unwrap();
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("keep.png"), b"keep").unwrap();

        let root = tmp.path().join("uploads");
        let uploads = UploadsDirectory::new(&root, "/uploads");
        uploads.initialize().unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        assert!(uploads.clear().is_clean());
        assert!(!root.exists());
        assert!(outside.join("keep.png").exists());
    }

    #[test]
    fn test_guard_shutdown_clears_once() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");

        let guard = UploadsDirectory::acquire(&root, "/uploads").unwrap();
        fs::write(guard.path_for("cat.png"), b"meow").unwrap();

        let report = guard.shutdown();
        assert!(report.is_clean());
        assert!(!root.exists());
    }

    #[test]
    fn test_guard_drop_clears() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");

        {
            let guard = UploadsDirectory::acquire(&root, "/uploads").unwrap();
            fs::write(guard.path_for("cat.png"), b"meow").unwrap();
            assert!(root.join("cat.png").exists());
        }

        assert!(!root.exists());
    }

    #[test]
    fn test_paths_and_urls() {
        let uploads = UploadsDirectory::new("uploads", "/uploads/");

        assert_eq!(uploads.url_prefix(), "/uploads");
        assert_eq!(uploads.url_for("cat.png"), "/uploads/cat.png");
        assert_eq!(uploads.path_for("cat.png"), PathBuf::from("uploads").join("cat.png"));
        assert_eq!(uploads.path_for("/etc/cat.png"), PathBuf::from("uploads").join("etc/cat.png"));
    }
}
