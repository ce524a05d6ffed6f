//! 个人档案：统计信息与历史记录

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::api::user::{UserHistoryResponse, UserStatistics};
use crate::country::country_name;

fn fmt_metric(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();

    let (stats, set_stats) = signal(Option::<UserStatistics>::None);
    let (history, set_history) = signal(Option::<UserHistoryResponse>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_user_statistics().await {
                    Ok(data) => set_stats.set(Some(data)),
                    Err(e) => set_error_msg.set(Some(format!("加载统计信息失败: {}", e))),
                }
                match api.get_user_history(30).await {
                    Ok(data) => set_history.set(Some(data)),
                    Err(e) => set_error_msg.set(Some(format!("加载历史记录失败: {}", e))),
                }
            });
        }
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 space-y-6">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title">
                                        {s.username.clone().unwrap_or_else(|| s.wq_id.clone())}
                                        <span class="badge badge-ghost">
                                            {country_name(s.country.as_deref())}
                                        </span>
                                    </h2>
                                    <div class="stats stats-vertical md:stats-horizontal shadow">
                                        <div class="stat">
                                            <div class="stat-title">"当前权重"</div>
                                            <div class="stat-value text-primary">
                                                {format!("{:.2}", s.current_weight)}
                                            </div>
                                            <div class="stat-desc">
                                                {format!("日变化 {:+.2}", s.daily_change)}
                                            </div>
                                        </div>
                                        <div class="stat">
                                            <div class="stat-title">"历史最高"</div>
                                            <div class="stat-value">{format!("{:.2}", s.max_weight)}</div>
                                        </div>
                                        <div class="stat">
                                            <div class="stat-title">"总提交数"</div>
                                            <div class="stat-value">{s.total_submissions}</div>
                                            <div class="stat-desc">
                                                {format!("记录天数 {}", s.record_days)}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"近 30 天记录"</h2>
                    <table class="table table-zebra table-sm">
                        <thead>
                            <tr>
                                <th>"日期"</th>
                                <th>"权重"</th>
                                <th>"Value"</th>
                                <th>"提交数"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                history
                                    .get()
                                    .map(|h| h.data)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.record_date.clone()}</td>
                                                <td>{fmt_metric(row.weight_factor)}</td>
                                                <td>{fmt_metric(row.value_factor)}</td>
                                                <td>
                                                    {row
                                                        .submissions_count
                                                        .map(|c| c.to_string())
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
