use std::path::PathBuf;

use super::config::DownloadConfig;
use super::error::HubError;
use super::fetcher::HubFetcher;
use super::lister::HubLister;

/// 다운로드 실행 결과 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// 목록에서 발견한 파일 수
    pub total: usize,
    /// 성공적으로 받은 파일 수
    pub succeeded: usize,
    /// 파일이 저장된 디렉토리
    pub model_dir: PathBuf,
}

/// 목록 조회 → 디렉토리 생성 → 순차 다운로드를 묶는 오케스트레이터
pub struct ModelDownloader {
    config: DownloadConfig,
    lister: HubLister,
    fetcher: HubFetcher,
}

impl ModelDownloader {
    pub fn new(config: DownloadConfig) -> Result<Self, HubError> {
        let lister = HubLister::new(config.clone());
        let fetcher = HubFetcher::new(config.clone())?;
        Ok(Self {
            config,
            lister,
            fetcher,
        })
    }

    /// 모델 전체 다운로드 실행
    ///
    /// 목록 조회 실패와 출력 디렉토리 생성 실패는 치명적(Err 반환).
    /// 개별 파일 실패는 출력만 하고 다음 파일로 계속 진행한다.
    pub async fn run(&self) -> Result<DownloadReport, HubError> {
        println!("🔍 Checking available files...");
        let files = self.lister.list_files().await?;
        println!("✅ Found {} files", files.len());

        let model_dir = self.config.model_dir();
        tokio::fs::create_dir_all(&model_dir).await?;

        println!("\n📥 Starting downloads...");
        println!("{}", "-".repeat(50));

        let mut succeeded = 0;
        for (i, file) in files.iter().enumerate() {
            println!("[{}/{}] Downloading {}...", i + 1, files.len(), file.path);

            match self.fetcher.fetch_file(file, &model_dir).await {
                Ok(written) => {
                    if file.size > 0 && written != file.size {
                        println!(
                            "⚠️  Size mismatch for {}: expected {} bytes, got {}",
                            file.path, file.size, written
                        );
                    }
                    println!("✅ Downloaded {} ({} bytes)", file.path, written);
                    succeeded += 1;
                }
                Err(e) => {
                    println!("❌ Failed to download {}: {}", file.path, e);
                }
            }
        }

        Ok(DownloadReport {
            total: files.len(),
            succeeded,
            model_dir,
        })
    }
}
