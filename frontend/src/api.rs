use crate::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use jobtrack_shared::protocol::{
    ApiRequest, AuthCheckRequest, CreateJobApplicationRequest, DeleteJobApplicationRequest,
    ListJobApplicationsRequest, LoginRequest, LogoutRequest, UpdateJobApplicationRequest,
};
use jobtrack_shared::{JobApplication, JobApplicationFields, JobId};
use thiserror::Error;
use tracing::debug;

/// API 调用错误
///
/// 按失败原因分类；界面层决定哪些区别要展示给用户。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    #[error("not authenticated (HTTP {0})")]
    Unauthorized(u16),
    #[error("request rejected (HTTP {0})")]
    Rejected(u16),
    #[error("server error (HTTP {0})")]
    Server(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// 由非 2xx 状态码归类
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized(status),
            400..=499 => ApiError::Rejected(status),
            _ => ApiError::Server(status),
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// 求职记录 API 客户端
///
/// 鉴权完全依赖浏览器自动携带的会话 Cookie，不在客户端保存任何密钥。
#[derive(Clone, Debug)]
pub struct JobTrackApi<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> JobTrackApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并检查状态码，不解析响应体
    async fn execute<R: ApiRequest>(&self, req: &R) -> Result<HttpResponse, ApiError> {
        let url = self.url(&req.path());
        let mut http = HttpRequest::new(&url, R::METHOD);
        if let Some(body) = req.body() {
            let json =
                serde_json_wasm::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            http = http.with_json_body(json);
        }

        debug!(method = %R::METHOD, %url, "sending request");
        let res = self.client.send(http).await?;

        if !res.ok() {
            debug!(method = %R::METHOD, %url, status = res.status, "request failed");
            return Err(ApiError::from_status(res.status));
        }
        Ok(res)
    }

    /// 发送请求并把响应体解析为 `R::Response`
    async fn fetch<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let res = self.execute(req).await?;
        serde_json_wasm::from_str::<R::Response>(&res.body)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 用浏览器现有的 Cookie 校验会话
    pub async fn auth_check(&self) -> Result<(), ApiError> {
        self.execute(&AuthCheckRequest).await.map(|_| ())
    }

    /// 登录；成功时服务端通过 Set-Cookie 下发会话
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(&req).await.map(|_| ())
    }

    /// 注销服务端会话
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(&LogoutRequest).await.map(|_| ())
    }

    /// 获取全部求职记录（保持服务端返回顺序）
    pub async fn list_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.fetch(&ListJobApplicationsRequest).await
    }

    /// 创建记录，返回服务端分配了 id 的完整记录
    pub async fn create_application(
        &self,
        fields: JobApplicationFields,
    ) -> Result<JobApplication, ApiError> {
        self.fetch(&CreateJobApplicationRequest { fields }).await
    }

    /// 整体替换记录的可写字段
    pub async fn update_application(
        &self,
        id: JobId,
        fields: JobApplicationFields,
    ) -> Result<JobApplication, ApiError> {
        self.fetch(&UpdateJobApplicationRequest { id, fields }).await
    }

    /// 删除记录
    pub async fn delete_application(&self, id: JobId) -> Result<(), ApiError> {
        self.execute(&DeleteJobApplicationRequest { id })
            .await
            .map(|_| ())
    }
}
