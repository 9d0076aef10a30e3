use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use super::config::DownloadConfig;
use super::error::HubError;

/// tree API 응답의 원시 항목
#[derive(Debug, Deserialize)]
struct TreeEntry {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    #[serde(default)]
    size: u64,
}

/// 모델 저장소의 다운로드 대상 파일 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    /// 파일 이름 (경로의 마지막 세그먼트)
    pub name: String,
    /// 저장소 내 상대 경로 (하위 디렉토리 포함 가능)
    pub path: String,
    /// API가 알려준 크기, 모르면 0
    pub size: u64,
}

/// 모델 저장소의 파일 목록을 조회하는 클라이언트
pub struct HubLister {
    config: DownloadConfig,
    client: reqwest::Client,
}

impl HubLister {
    pub fn new(config: DownloadConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// 모델의 파일 목록 조회
    ///
    /// `{api_url}/models/{model_id}/tree/main`을 GET으로 호출하고,
    /// type == "file"인 항목만 API가 준 순서 그대로 반환한다.
    /// 페이지네이션은 처리하지 않는다 (API가 결과를 자르면 그대로 잘린다).
    pub async fn list_files(&self) -> Result<Vec<ModelFile>, HubError> {
        let url = self.config.listing_url();
        debug!("파일 목록 조회: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HubError::Remote {
                status: status.as_u16(),
                endpoint: url,
            });
        }

        // 파싱 오류를 Decode로 구분하기 위해 본문을 먼저 문자열로 받는다
        let body = response.text().await?;
        let entries: Vec<TreeEntry> = serde_json::from_str(&body)?;

        let files = entries
            .into_iter()
            .filter(|entry| entry.kind == "file")
            .map(|entry| {
                let name = base_name(&entry.path).to_string();
                ModelFile {
                    name,
                    path: entry.path,
                    size: entry.size,
                }
            })
            .collect();

        Ok(files)
    }
}

/// 경로의 마지막 '/' 세그먼트
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
