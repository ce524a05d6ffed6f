//! 趋势分析：国家权重时间序列

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::country::country_name;
use crate::types::leaderboard::CountryWeightTimeSeries;

#[component]
pub fn TrendsPage() -> impl IntoView {
    let api = use_api();

    let (series, set_series) = signal(Vec::<CountryWeightTimeSeries>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_country_weight_timeseries(None, 30).await {
                    Ok(data) => set_series.set(data),
                    Err(e) => set_error_msg.set(Some(format!("加载趋势数据失败: {}", e))),
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
                    <h2 class="card-title">"国家权重趋势（近 30 天）"</h2>
                    <table class="table table-zebra table-sm">
                        <thead>
                            <tr>
                                <th>"国家/地区"</th>
                                <th>"数据点"</th>
                                <th>"最新权重"</th>
                                <th>"最新日期"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                series
                                    .get()
                                    .into_iter()
                                    .map(|s| {
                                        let latest_weight = s
                                            .weights
                                            .last()
                                            .map(|w| format!("{:.2}", w))
                                            .unwrap_or_else(|| "-".to_string());
                                        let latest_date = s
                                            .dates
                                            .last()
                                            .cloned()
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>{country_name(Some(&s.country))}</td>
                                                <td>{s.dates.len()}</td>
                                                <td>{latest_weight}</td>
                                                <td>{latest_date}</td>
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
