//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦：路由服务通过注入的认证信号
//! 检查认证状态；持久化凭据统一经由 `SessionStore` 读写。

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, Transport};
use crate::session::{SessionCredential, SessionStore, StoredUser};

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 是否已认证
    pub is_authenticated: bool,
    /// 当前用户（仅在认证成功后存在）
    pub user: Option<StoredUser>,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从会话存储恢复上次的登录状态；守卫只信任本地标记，
/// 凭据是否仍然有效要到下一次 API 调用才能知道。
pub fn init_auth(ctx: &AuthContext, session: &SessionStore) {
    let is_authenticated = session.is_authenticated();
    let user = session.user();
    ctx.set_state.update(move |state| {
        state.is_authenticated = is_authenticated;
        state.user = user;
    });
}

/// 使用 WQ ID 登录并持久化会话
///
/// # Returns
/// 登录失败时返回可展示的错误消息
pub async fn login<T: Transport>(
    ctx: &AuthContext,
    api: &ApiClient<T>,
    session: &SessionStore,
    wq_id: &str,
) -> Result<(), String> {
    let response = api.login(wq_id).await.map_err(|e| e.to_string())?;

    match response.access_token {
        Some(token) if response.success => {
            let credential = SessionCredential {
                token,
                token_type: response.token_type,
                wq_id: response.wq_id.unwrap_or_else(|| wq_id.to_string()),
                username: response.username,
            };
            session.set(&credential);

            let user = StoredUser {
                wq_id: credential.wq_id.clone(),
                username: credential.username.clone(),
            };
            ctx.set_state.update(move |state| {
                state.is_authenticated = true;
                state.user = Some(user);
            });
            Ok(())
        }
        _ => Err(response.message),
    }
}

/// 注销并清除会话
///
/// 不需要手动导航，路由服务会监听认证状态变化并自动重定向。
pub fn logout(ctx: &AuthContext, session: &SessionStore) {
    session.clear();
    ctx.set_state.update(|state| {
        state.is_authenticated = false;
        state.user = None;
    });
}

/// 401 处理回调
///
/// 交给会话中间件，在任何请求收到 401 时将认证信号置为未认证；
/// 会话键本身由中间件先行清除。
pub fn make_unauthorized_hook(ctx: &AuthContext) -> Arc<dyn Fn() + Send + Sync> {
    let set_state = ctx.set_state;
    Arc::new(move || {
        set_state.update(|state| {
            state.is_authenticated = false;
            state.user = None;
        });
    })
}
