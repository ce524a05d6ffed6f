//! Genius 分层分析：按等级聚合的权重变化

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::types::leaderboard::GeniusLevelWeightChange;

#[component]
pub fn GeniusPage() -> impl IntoView {
    let api = use_api();

    let (changes, set_changes) = signal(Vec::<GeniusLevelWeightChange>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_genius_level_weight_changes(7).await {
                    Ok(data) => set_changes.set(data),
                    Err(e) => set_error_msg.set(Some(format!("加载 Genius 数据失败: {}", e))),
                }
            });
        }
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 space-y-4">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Genius 等级权重变化（近 7 天）"</h2>
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>"等级"</th>
                                <th>"用户数"</th>
                                <th>"总权重"</th>
                                <th>"变化"</th>
                                <th>"变化率"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                changes
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="badge badge-primary">
                                                        {row.genius_level.clone()}
                                                    </span>
                                                </td>
                                                <td>{row.total_users}</td>
                                                <td>{format!("{:.2}", row.total_weight)}</td>
                                                <td>{format!("{:+.2}", row.weight_change)}</td>
                                                <td>
                                                    {row
                                                        .weight_change_percent
                                                        .map(|p| format!("{:+.2}%", p))
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
