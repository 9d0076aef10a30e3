use thiserror::Error;

/// Hub 다운로드 오류
#[derive(Debug, Error)]
pub enum HubError {
    /// 원격 서버가 200이 아닌 상태 코드를 반환
    #[error("원격 서버 오류: status {status} ({endpoint})")]
    Remote { status: u16, endpoint: String },

    /// tree 목록 응답 파싱 실패
    #[error("목록 응답 파싱 실패: {0}")]
    Decode(#[from] serde_json::Error),

    /// 로컬 파일/디렉토리 생성 실패
    #[error("로컬 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 연결 실패, 타임아웃 등 네트워크 수준 오류
    #[error("네트워크 오류: {0}")]
    Network(#[from] reqwest::Error),
}
