//! 排名仪表盘：国家排名分页表格

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::country::country_name;
use crate::types::common::PaginatedResponse;
use crate::types::dashboard::CountryRankingData;

fn fmt_metric(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let (page, set_page) = signal(1u32);
    let (rankings, set_rankings) = signal(Option::<PaginatedResponse<CountryRankingData>>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // page 变化时重新加载
    Effect::new({
        let api = api.clone();
        move |_| {
            let current_page = page.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_country_rankings(current_page, 50, None).await {
                    Ok(data) => {
                        set_error_msg.set(None);
                        set_rankings.set(Some(data));
                    }
                    Err(e) => set_error_msg.set(Some(format!("加载国家排名失败: {}", e))),
                }
                set_loading.set(false);
            });
        }
    });

    let total_pages = move || rankings.get().map(|r| r.total_pages).unwrap_or(1);

    view! {
        <div class="max-w-6xl mx-auto px-4 space-y-4">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"国家排名"</h2>
                    <Show
                        when=move || !loading.get()
                        fallback=|| {
                            view! {
                                <div class="flex justify-center py-8">
                                    <span class="loading loading-spinner loading-lg"></span>
                                </div>
                            }
                        }
                    >
                        <table class="table table-zebra table-sm">
                            <thead>
                                <tr>
                                    <th>"国家/地区"</th>
                                    <th>"用户数"</th>
                                    <th>"权重"</th>
                                    <th>"权重变化"</th>
                                    <th>"提交数"</th>
                                    <th>"总提交"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    rankings
                                        .get()
                                        .map(|r| r.data)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{country_name(Some(&row.country))}</td>
                                                    <td>{row.user_count}</td>
                                                    <td>{format!("{:.2}", row.weight_factor)}</td>
                                                    <td>{fmt_metric(row.weight_change)}</td>
                                                    <td>{row.submissions_count}</td>
                                                    <td>{row.total_submissions}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </Show>

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
