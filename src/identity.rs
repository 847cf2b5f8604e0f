/// 요청자 식별
/// 인증은 별도 서비스에서 처리한다고 가정하고, 전달된 사용자 이름만 요청에 붙인다.
// region:    --- Imports
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

// endregion: --- Imports

/// 요청자 이름 헤더
pub const CALLER_HEADER: &str = "x-username";

/// 헤더가 없을 때 사용하는 판매자 이름
pub const PLACEHOLDER_CALLER: &str = "test";

/// 요청자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub username: String,
}

impl Caller {
    fn from_request(req: &Request) -> Self {
        let username = req
            .headers()
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(PLACEHOLDER_CALLER);
        Self {
            username: username.to_string(),
        }
    }
}

/// 요청자 정보를 요청 extension 으로 등록 (권한 검사는 하지 않음)
pub async fn authorize(mut req: Request, next: Next) -> Response {
    let caller = Caller::from_request(&req);
    debug!("{:<12} --> 요청자: {}", "Identity", caller.username);
    req.extensions_mut().insert(caller);
    next.run(req).await
}
