use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::StatusCode;
use tokio::io::AsyncWriteExt;

use super::config::DownloadConfig;
use super::error::HubError;
use super::lister::ModelFile;

/// 브라우저처럼 보이게 하는 User-Agent (일부 저장소가 기본 UA를 차단함)
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
/// 요청 전체에 걸리는 클라이언트 타임아웃 (대형 모델 파일 기준 30분)
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// 파일 하나를 스트리밍으로 받아 로컬에 저장하는 클라이언트
pub struct HubFetcher {
    config: DownloadConfig,
    client: reqwest::Client,
}

impl HubFetcher {
    pub fn new(config: DownloadConfig) -> Result<Self, HubError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DOWNLOAD_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    /// 파일 하나 다운로드, 기록한 바이트 수 반환
    ///
    /// `{base_url}/{model_id}/resolve/main/{path}`를 GET으로 받아
    /// `model_dir/{name}`에 기록한다. 저장소 내 하위 디렉토리 구조는
    /// 유지하지 않고 모든 파일을 한 디렉토리에 평탄하게 저장한다.
    /// 실패 시 재시도하지 않으며, 중간까지 쓰인 파일은 지우지 않는다.
    pub async fn fetch_file(&self, file: &ModelFile, model_dir: &Path) -> Result<u64, HubError> {
        let url = self.config.resolve_url(&file.path);
        let output_path = model_dir.join(&file.name);
        debug!("다운로드: {} -> {:?}", url, output_path);

        let mut response = self
            .client
            .get(&url)
            .header("Accept", "*/*")
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HubError::Remote {
                status: status.as_u16(),
                endpoint: url,
            });
        }

        let mut output = tokio::fs::File::create(&output_path).await?;

        // 크기를 아는 파일만 진행률 표시
        let bar = if file.size > 0 {
            let bar = ProgressBar::new(file.size);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("   [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .unwrap()
                    .progress_chars("██░"),
            );
            bar.set_message(file.name.clone());
            Some(bar)
        } else {
            None
        };

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            output.write_all(&chunk).await?;
            written += chunk.len() as u64;
            if let Some(bar) = &bar {
                bar.inc(chunk.len() as u64);
            }
        }
        output.flush().await?;

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        Ok(written)
    }
}
