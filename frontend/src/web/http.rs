//! 浏览器 HTTP 传输
//!
//! 基于 `gloo-net` 的 fetch 封装，实现 `HttpClient` trait。
//! 所有请求都带上 `credentials: include`，让浏览器自动携带会话 Cookie。

use crate::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// 生产环境使用的 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        }
        .credentials(RequestCredentials::Include);

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("网络错误: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
