//! Combined 指标分析：三个子指标的用户变化列表

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::leaderboard::CombinedChangeQuery;
use crate::api::use_api;
use crate::country::country_name;
use crate::types::common::PaginatedResponse;
use crate::types::leaderboard::CombinedUserChange;

fn fmt_metric(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:+.3}", v))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn CombinedPage() -> impl IntoView {
    let api = use_api();

    let (page, set_page) = signal(1u32);
    let (changes, set_changes) = signal(Option::<PaginatedResponse<CombinedUserChange>>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let query = CombinedChangeQuery {
                page: page.get(),
                ..Default::default()
            };
            let api = api.clone();
            spawn_local(async move {
                match api.get_combined_user_changes(&query).await {
                    Ok(data) => {
                        set_error_msg.set(None);
                        set_changes.set(Some(data));
                    }
                    Err(e) => set_error_msg.set(Some(format!("加载 combined 数据失败: {}", e))),
                }
            });
        }
    });

    let total_pages = move || changes.get().map(|c| c.total_pages).unwrap_or(1);

    view! {
        <div class="max-w-6xl mx-auto px-4 space-y-4">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Combined 指标用户变化"</h2>
                    <table class="table table-zebra table-sm">
                        <thead>
                            <tr>
                                <th>"排名"</th>
                                <th>"用户"</th>
                                <th>"国家/地区"</th>
                                <th>"Alpha 变化"</th>
                                <th>"Power Pool 变化"</th>
                                <th>"Selected 变化"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                changes
                                    .get()
                                    .map(|c| c.data)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.rank}</td>
                                                <td>{row.user.clone()}</td>
                                                <td>{country_name(row.country.as_deref())}</td>
                                                <td>{fmt_metric(row.alpha_change)}</td>
                                                <td>{fmt_metric(row.power_pool_change)}</td>
                                                <td>{fmt_metric(row.selected_change)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>

                    <div class="join justify-center mt-2">
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || page.get() <= 1
                            on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                        >
                            "上一页"
                        </button>
                        <span class="join-item btn btn-sm btn-disabled">
                            {move || format!("{} / {}", page.get(), total_pages())}
                        </span>
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || page.get() >= total_pages()
                            on:click=move |_| set_page.update(|p| *p += 1)
                        >
                            "下一页"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
