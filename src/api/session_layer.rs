//! 会话中间件
//!
//! 原来的"拦截器"以显式装饰器的形式包裹在传输层外：
//! - 出站：存在 token 时附加 `Authorization: Bearer` 头
//! - 入站：遇到 401 时清空会话并触发注入的未认证回调，
//!   随后将失败原样返回给调用方（不吞掉）
//!
//! 其余一切结果（网络错误、超时、非 401 状态）原样透传。

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ApiResult;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::session::SessionStore;
use crate::web::console;

/// 会话中间件：附加凭据并处理认证失效
pub struct SessionLayer<T> {
    inner: T,
    session: Arc<SessionStore>,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl<T> SessionLayer<T> {
    /// 包裹一个传输实现
    ///
    /// `on_unauthorized` 在任何请求收到 401 时触发；生产环境中它将认证
    /// 信号置为未认证，路由服务监听到变化后自动跳转登录页。
    pub fn new(
        inner: T,
        session: Arc<SessionStore>,
        on_unauthorized: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            inner,
            session,
            on_unauthorized,
        }
    }
}

#[async_trait(?Send)]
impl<T: Transport> Transport for SessionLayer<T> {
    async fn send(&self, mut req: ApiRequest) -> ApiResult<ApiResponse> {
        if let Some(token) = self.session.token() {
            req = req.with_header("Authorization", &format!("Bearer {}", token));
        }

        console::debug(&format!(
            "[Api] {} {}{}",
            req.method.as_str(),
            req.path,
            if req.query.is_empty() { "" } else { " (+query)" },
        ));

        let path = req.path.clone();
        let result = self.inner.send(req).await;

        match &result {
            Ok(response) => {
                console::debug(&format!("[Api] {} -> {}", path, response.status));
                if response.status == 401 {
                    // 认证已失效：清空会话并通知上层，多个并发 401 重复执行
                    // 也只是幂等的重复清理
                    console::debug("[Api] 401 received. Clearing session.");
                    self.session.clear();
                    (self.on_unauthorized)();
                }
            }
            Err(error) => {
                console::debug(&format!("[Api] {} failed: {}", path, error));
            }
        }

        result
    }
}
