//! HTTP 传输层
//!
//! `Transport` trait 定义请求-响应抽象，生产实现 `FetchTransport`
//! 基于浏览器 fetch（gloo-net），并统一附加固定的 base path 与
//! 30 秒全局超时。中间件与测试替身都实现同一个 trait，
//! 从而解耦具体的 HTTP 实现。

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};
use super::query::Query;

/// 固定的后端 API base path
pub const API_BASE: &str = "/api/v1";

/// 全局请求超时（毫秒）
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// HTTP 请求方法（本层只使用 GET / POST）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query.into_pairs();
        self
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// 响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 将响应体解析为指定类型
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

/// HTTP 传输抽象
///
/// `(?Send)` 是因为 WASM 单线程环境下 JS 相关类型不是 Send 的。
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: ApiRequest) -> ApiResult<ApiResponse>;
}

// =========================================================
// 生产实现: 浏览器 fetch
// =========================================================

/// 基于浏览器 fetch 的传输实现
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn dispatch(&self, req: ApiRequest) -> ApiResult<ApiResponse> {
        use gloo_net::http::Request;

        let url = self.url(&req.path);
        let builder = match req.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };

        let mut builder =
            builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let response = match req.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.to_string())
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: ApiRequest) -> ApiResult<ApiResponse> {
        use futures::FutureExt;
        use futures::{pin_mut, select};
        use gloo_timers::future::TimeoutFuture;

        // fetch 没有原生超时，通过与定时器竞争实现全局 30 秒上限
        let request = self.dispatch(req).fuse();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
        pin_mut!(request, timeout);

        select! {
            result = request => result,
            _ = timeout => Err(ApiError::Timeout),
        }
    }
}
