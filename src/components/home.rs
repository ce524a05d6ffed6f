//! 首页：汇总统计 + 用户排行榜

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::country::country_name;
use crate::types::common::SortOrder;
use crate::types::leaderboard::{SummaryStatistics, UserWeightData};

fn fmt_metric(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();

    let (summary, set_summary) = signal(Option::<SummaryStatistics>::None);
    let (leaders, set_leaders) = signal(Vec::<UserWeightData>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_summary_statistics(7).await {
                    Ok(data) => set_summary.set(Some(data)),
                    Err(e) => set_error_msg.set(Some(format!("加载汇总统计失败: {}", e))),
                }
                match api.get_user_leaderboard(6, 7, SortOrder::Desc).await {
                    Ok(data) => set_leaders.set(data),
                    Err(e) => set_error_msg.set(Some(format!("加载用户排行失败: {}", e))),
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
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="stats shadow w-full">
                                <div class="stat">
                                    <div class="stat-title">"总用户数"</div>
                                    <div class="stat-value">{s.total_users}</div>
                                    <div class="stat-desc">{format!("较上期 {:+}", s.user_change)}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"总 Alpha 数"</div>
                                    <div class="stat-value">{s.total_alpha}</div>
                                    <div class="stat-desc">{format!("较上期 {:+}", s.alpha_change)}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"总权重"</div>
                                    <div class="stat-value">{format!("{:.1}", s.total_weight)}</div>
                                    <div class="stat-desc">
                                        {format!("较上期 {:+.2}", s.weight_change)}
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"权重变化榜（近 7 天）"</h2>
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>"用户"</th>
                                <th>"国家/地区"</th>
                                <th>"权重"</th>
                                <th>"变化"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                leaders
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.user.clone()}</td>
                                                <td>{country_name(row.country.as_deref())}</td>
                                                <td>{fmt_metric(row.weight_factor)}</td>
                                                <td>{fmt_metric(row.weight_change)}</td>
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
