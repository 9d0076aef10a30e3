use std::path::PathBuf;

/// 기본 HuggingFace 주소
pub const DEFAULT_BASE_URL: &str = "https://huggingface.co";
/// 기본 HuggingFace API 주소
pub const DEFAULT_API_URL: &str = "https://huggingface.co/api";

/// 다운로드 설정
///
/// CLI 입력으로부터 한 번 생성되고 이후 변경되지 않는다.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// 모델 ID (예: Qwen/Qwen2.5-Coder-0.5B)
    pub model_id: String,
    /// 파일 다운로드 기본 주소
    pub base_url: String,
    /// tree 목록 조회 API 주소
    pub api_url: String,
    /// 로컬 출력 루트 디렉토리
    pub output_dir: PathBuf,
}

impl DownloadConfig {
    pub fn new(model_id: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_id: model_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            output_dir: output_dir.into(),
        }
    }

    /// 모델별 로컬 디렉토리: 모델 ID의 '/'를 '_'로 치환해서 출력 루트 아래에 만든다
    pub fn model_dir(&self) -> PathBuf {
        self.output_dir.join(self.model_id.replace('/', "_"))
    }

    /// tree 목록 조회 URL (main 브랜치 고정)
    pub fn listing_url(&self) -> String {
        format!("{}/models/{}/tree/main", self.api_url, self.model_id)
    }

    /// 파일 다운로드 URL (resolve/main 경로)
    pub fn resolve_url(&self, file_path: &str) -> String {
        format!("{}/{}/resolve/main/{}", self.base_url, self.model_id, file_path)
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self::new("Qwen/Qwen2.5-Coder-0.5B", "./models")
    }
}
