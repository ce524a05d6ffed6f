//! Brainboard 前端应用
//!
//! 排名/排行榜统计仪表盘的客户端数据访问与路由层，
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: 类型化远程数据访问层（传输抽象 + 会话中间件 + 领域模块）
//! - `types`: 请求/响应载荷形状
//! - `session`: 会话凭据存储（三个存储键的唯一持有者）
//! - `auth`: 认证状态管理
//! - `web::route` / `web::router`: 路由定义与带守卫的路由服务
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod country;
pub mod session;
pub mod types;

mod components {
    pub mod combined;
    pub mod dashboard;
    pub mod genius;
    pub mod home;
    pub mod login;
    pub mod nav;
    pub mod notice;
    pub mod profile;
    pub mod trends;
    pub mod value_factor;
}

pub(crate) mod web {
    pub mod console;
    pub mod route;
    pub mod router;
}

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::Api;
use crate::auth::{AuthContext, init_auth, make_unauthorized_hook};
use crate::components::combined::CombinedPage;
use crate::components::dashboard::DashboardPage;
use crate::components::genius::GeniusPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::nav::NavBar;
use crate::components::notice::NoticePage;
use crate::components::profile::ProfilePage;
use crate::components::trends::TrendsPage;
use crate::components::value_factor::ValueFactorPage;
use crate::session::SessionStore;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；受保护页面统一带导航栏。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <NavBar /> <HomePage /> }.into_any(),
        AppRoute::Profile => view! { <NavBar /> <ProfilePage /> }.into_any(),
        AppRoute::Dashboard => view! { <NavBar /> <DashboardPage /> }.into_any(),
        AppRoute::Trends => view! { <NavBar /> <TrendsPage /> }.into_any(),
        AppRoute::Genius => view! { <NavBar /> <GeniusPage /> }.into_any(),
        AppRoute::Notice => view! { <NavBar /> <NoticePage /> }.into_any(),
        AppRoute::ValueFactor => view! { <NavBar /> <ValueFactorPage /> }.into_any(),
        AppRoute::Combined => view! { <NavBar /> <CombinedPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话存储：三个存储键的唯一持有者
    let session = Arc::new(SessionStore::browser());

    // 2. 认证上下文，并从会话存储恢复状态
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &session);

    // 3. API 客户端：fetch 传输 + 显式装配的会话中间件，
    //    401 时由中间件清会话并通过回调将认证信号置为未认证
    let api = Arc::new(Api::new(
        Arc::clone(&session),
        make_unauthorized_hook(&auth_ctx),
    ));
    provide_context(api);
    provide_context(session);

    // 4. 路由器组件：注入认证信号实现守卫
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
