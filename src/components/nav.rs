//! 顶部导航栏

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const NAV_LINKS: [AppRoute; 8] = [
    AppRoute::Home,
    AppRoute::Dashboard,
    AppRoute::Trends,
    AppRoute::Genius,
    AppRoute::ValueFactor,
    AppRoute::Combined,
    AppRoute::Profile,
    AppRoute::Notice,
];

#[component]
pub fn NavBar() -> impl IntoView {
    let auth_ctx = use_auth();
    let session = use_session();
    let router = use_router();

    let username = move || {
        auth_ctx
            .state
            .get()
            .user
            .and_then(|u| u.username)
            .unwrap_or_else(|| "-".to_string())
    };

    let on_logout = move |_| {
        // 导航由路由服务的认证状态监听自动处理
        logout(&auth_ctx, &session);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md mb-4">
            <div class="flex-1 gap-1 flex-wrap">
                <span class="text-lg font-bold px-2">"Brainboard"</span>
                {NAV_LINKS
                    .into_iter()
                    .map(|route| {
                        let is_active = move || router.current_route().get() == route;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "btn btn-sm btn-primary"
                                    } else {
                                        "btn btn-sm btn-ghost"
                                    }
                                }
                                on:click=move |_| router.navigate(route.to_path())
                            >
                                {route.name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex-none gap-2">
                <span class="text-sm opacity-70">{username}</span>
                <button class="btn btn-sm btn-outline" on:click=on_logout>
                    "退出"
                </button>
            </div>
        </div>
    }
}
