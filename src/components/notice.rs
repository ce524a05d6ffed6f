//! 公告与反馈页面

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::feedback::{FeedbackRequest, FeedbackType};
use crate::api::use_api;
use crate::web::route::AppRoute;

#[component]
pub fn NoticePage() -> impl IntoView {
    let api = use_api();

    let (content, set_content) = signal(String::new());
    let (feedback_type, set_feedback_type) = signal(FeedbackType::Bug);
    let (contact, set_contact) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // 消息内容, 是否出错
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if content.get().trim().is_empty() {
            set_notification.set(Some(("请填写反馈内容".to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        let payload = FeedbackRequest {
            content: content.get_untracked().trim().to_string(),
            feedback_type: feedback_type.get_untracked(),
            page: Some(AppRoute::Notice.to_path().to_string()),
            contact: Some(contact.get_untracked())
                .filter(|c| !c.trim().is_empty())
                .map(|c| c.trim().to_string()),
        };

        let api = api.clone();
        spawn_local(async move {
            match api.submit_feedback(&payload).await {
                Ok(response) => {
                    set_notification.set(Some((response.message, !response.success)));
                    set_content.set(String::new());
                }
                Err(e) => {
                    set_notification.set(Some((format!("提交反馈失败: {}", e), true)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"公告"</h2>
                    <p>"排名数据每日更新，统计口径以当日最后一次快照为准。"</p>
                    <p>"Value factor 与 combined 指标为两个日期之间的对比结果，部分周期可能尚未计算完成。"</p>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title">"问题反馈"</h2>

                    <Show when=move || notification.get().is_some()>
                        <div
                            role="alert"
                            class=move || {
                                let (_, is_err) = notification.get().unwrap_or_default();
                                if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                            }
                        >
                            <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"反馈类型"</span>
                        </label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| {
                                let selected = match event_target_value(&ev).as_str() {
                                    "optimize" => FeedbackType::Optimize,
                                    "request" => FeedbackType::Request,
                                    _ => FeedbackType::Bug,
                                };
                                set_feedback_type.set(selected);
                            }
                        >
                            <option value="bug">"问题"</option>
                            <option value="optimize">"优化建议"</option>
                            <option value="request">"功能需求"</option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"内容"</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered h-24"
                            placeholder="描述遇到的问题或建议"
                            prop:value=content
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"联系方式（可选）"</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            prop:value=contact
                            on:input=move |ev| set_contact.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "提交中..." } else { "提交反馈" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
