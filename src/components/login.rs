//! 登录页面

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let session = use_session();

    let (wq_id, set_wq_id) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if wq_id.get().trim().is_empty() {
            set_error_msg.set(Some("请输入 WQ ID".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let session = session.clone();
        spawn_local(async move {
            // 登录成功后路由服务会监听认证状态变化并自动跳转首页
            if let Err(msg) = login(
                &auth_ctx,
                api.as_ref(),
                session.as_ref(),
                wq_id.get_untracked().trim(),
            )
            .await
            {
                set_error_msg.set(Some(msg));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Brainboard"</h1>
                    <p class="text-base-content/70">"输入 WQ ID 登录查看排名统计"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="wq-id">
                                <span class="label-text">"WQ ID"</span>
                            </label>
                            <input
                                id="wq-id"
                                type="text"
                                placeholder="WQ000000"
                                on:input=move |ev| set_wq_id.set(event_target_value(&ev))
                                prop:value=wq_id
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "登录中..."
                                        }
                                            .into_any()
                                    } else {
                                        "登录".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
