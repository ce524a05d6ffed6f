//! Value factor 分析：用户变化分页列表

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::leaderboard::ValueFactorChangeQuery;
use crate::api::use_api;
use crate::country::country_name;
use crate::types::common::PaginatedResponse;
use crate::types::leaderboard::ValueFactorUserChange;

#[component]
pub fn ValueFactorPage() -> impl IntoView {
    let api = use_api();

    let (page, set_page) = signal(1u32);
    let (changes, set_changes) = signal(Option::<PaginatedResponse<ValueFactorUserChange>>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let query = ValueFactorChangeQuery {
                page: page.get(),
                ..Default::default()
            };
            let api = api.clone();
            spawn_local(async move {
                match api.get_value_factor_user_changes(&query).await {
                    Ok(data) => {
                        set_error_msg.set(None);
                        set_changes.set(Some(data));
                    }
                    Err(e) => set_error_msg.set(Some(format!("加载 value factor 数据失败: {}", e))),
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
                    <h2 class="card-title">"Value Factor 用户变化"</h2>
                    <table class="table table-zebra table-sm">
                        <thead>
                            <tr>
                                <th>"排名"</th>
                                <th>"用户"</th>
                                <th>"国家/地区"</th>
                                <th>"起始值"</th>
                                <th>"结束值"</th>
                                <th>"变化"</th>
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
                                                <td>{format!("{:.3}", row.start_value)}</td>
                                                <td>{format!("{:.3}", row.end_value)}</td>
                                                <td>{format!("{:+.3}", row.value_change)}</td>
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
