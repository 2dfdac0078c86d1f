use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_sheet::layout::LOOKUP_TITLE_FALLBACK;
use lunch_sheet::lookup::DETAIL_HEADINGS;
use lunch_sheet::view::{LookupMode, LookupView};
use lunch_sheet::{ALL_SENTINEL, DetailLine, Filter, GroupTotals, LookupSheet, Summary, format_amount};

use crate::api::fetch_lookup;

const TH: &str = "p-3 border-r border-blue-500";

/// Order lookup: per-buyer detail or one of the summary reports
#[component]
pub fn LookupPage() -> impl IntoView {
    let sheet = RwSignal::new(None::<LookupSheet>);
    let loading = RwSignal::new(true);
    let state = RwSignal::new(LookupView::default());

    // A failed fetch keeps whatever was loaded before.
    spawn_local(async move {
        if let Some(loaded) = fetch_lookup().await {
            sheet.set(Some(loaded));
        }
        loading.set(false);
    });

    let title = move || {
        sheet.with(|s| {
            s.as_ref()
                .map(|s| s.title().to_string())
                .unwrap_or_else(|| LOOKUP_TITLE_FALLBACK.to_string())
        })
    };
    let buyers = move || sheet.with(|s| s.as_ref().map(LookupSheet::buyers).unwrap_or_default());

    view! {
        <div class="p-4 md:p-6">
            <h2 class="text-2xl font-bold text-center mb-6 text-gray-800">{title}</h2>

            <div class="bg-gray-50 rounded-xl border p-4 mb-6 shadow-sm flex flex-wrap gap-4 items-center">
                <div class="flex items-center gap-2">
                    <label class="text-sm font-bold text-gray-700 whitespace-nowrap">"訂購人："</label>
                    <select
                        class="border rounded-lg p-2 bg-white shadow-sm"
                        prop:value=move || state.with(|s| s.buyer_selection().to_string())
                        on:change=move |ev| state.update(|s| s.select_buyer(&event_target_value(&ev)))
                    >
                        <option value="">"--請選擇--"</option>
                        <option value=ALL_SENTINEL>"全部訂單清單"</option>
                        {move || buyers().into_iter().map(|b| view! {
                            <option value=b.clone()>{b.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="flex items-center gap-2">
                    <label class="text-sm font-bold text-gray-700 whitespace-nowrap">"統計報表："</label>
                    <select
                        class="border rounded-lg p-2 bg-white shadow-sm"
                        prop:value=move || state.with(|s| s.summary_selection().to_string())
                        on:change=move |ev| state.update(|s| s.select_summary(&event_target_value(&ev)))
                    >
                        <option value="">"--請選擇--"</option>
                        {Summary::ALL.into_iter().map(|kind| view! {
                            <option value=kind.selection()>{kind.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <Show when=move || loading.get()>
                    <span class="text-blue-500 animate-pulse font-medium ml-auto">"同步資料中..."</span>
                </Show>
            </div>

            <div class="overflow-x-auto rounded-xl border border-gray-200 shadow-md">
                <table class="w-full text-sm">
                    <thead class="bg-blue-600 text-white">
                        {move || state.with(|s| header_row(s.mode()))}
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-100">
                        {move || state.with(|s| sheet.with(|sheet| body_rows(s.mode(), sheet.as_ref())))}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn header_row(mode: LookupMode<'_>) -> AnyView {
    match mode {
        LookupMode::Summary(kind) => view! {
            <tr>
                <th class=TH>{kind.key_heading()}</th>
                <th class="p-3">{kind.total_heading()}</th>
            </tr>
        }
        .into_any(),
        _ => view! {
            <tr>
                {DETAIL_HEADINGS.into_iter().map(|h| view! { <th class=TH>{h}</th> }).collect_view()}
            </tr>
        }
        .into_any(),
    }
}

fn body_rows(mode: LookupMode<'_>, sheet: Option<&LookupSheet>) -> AnyView {
    match mode {
        LookupMode::Prompt => view! {
            <tr>
                <td colspan="10" class="p-16 text-center text-gray-400 font-medium">
                    "請從上方選單選擇查詢條件"
                </td>
            </tr>
        }
        .into_any(),
        LookupMode::Summary(kind) => {
            let totals = sheet.map(|s| s.summary(kind)).unwrap_or_default();
            summary_rows(kind, totals)
        }
        LookupMode::Detail(filter) => {
            let (lines, total) = sheet.map(|s| s.detail_lines(filter)).unwrap_or_default();
            detail_rows(filter, lines, total)
        }
    }
}

fn summary_rows(kind: Summary, totals: GroupTotals) -> AnyView {
    let grand_total = format_amount(totals.grand_total);

    view! {
        {totals.groups.into_iter().map(|group| view! {
            <tr class="hover:bg-blue-50">
                <td class="p-3 border-r text-center">{group.key}</td>
                <td class="p-3 text-center font-bold text-blue-600">{format_amount(group.total)}</td>
            </tr>
        }).collect_view()}
        <tr class="bg-blue-50 font-bold">
            <td class="p-3 border-r text-center">{kind.grand_total_label()}</td>
            <td class="p-3 text-center text-blue-700 text-lg">{grand_total}</td>
        </tr>
    }
    .into_any()
}

fn detail_rows(filter: &Filter, lines: Vec<DetailLine>, total: f64) -> AnyView {
    // Only a single buyer gets a personal total row.
    let show_total = !filter.is_all();

    view! {
        {lines.into_iter().map(|line| view! {
            <tr class="hover:bg-blue-50">
                <td class="p-2.5 border-r text-center font-medium">{line.buyer}</td>
                <td class="p-2.5 border-r text-center">{line.item}</td>
                <td class="p-2.5 border-r text-center text-gray-500">{line.price}</td>
                <td class="p-2.5 border-r text-center text-gray-500">{line.rice_addon}</td>
                <td class="p-2.5 border-r text-center text-gray-500">{line.extra_addon}</td>
                <td class="p-2.5 border-r text-center font-bold">{line.quantity}</td>
                <td class="p-2.5 text-center font-bold text-blue-600">{format_amount(line.subtotal)}</td>
            </tr>
        }).collect_view()}
        {show_total.then(|| view! {
            <tr class="bg-blue-50 font-bold">
                <td colspan="6" class="p-3 border-r text-right text-gray-700">"個人合計"</td>
                <td class="p-3 text-center text-blue-700 text-lg">{format_amount(total)}</td>
            </tr>
        })}
    }
    .into_any()
}
