use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_sheet::view::{SettingsView, StatusKind};
use shared::CONFIG;

use crate::api::{get_store_options, submit_settings};
use crate::dom::{alert, today_iso};

const LABEL: &str = "text-xs font-black text-gray-400 uppercase mb-2 block tracking-wider";
const FIELD: &str = "w-full p-3 bg-gray-50 border-2 border-gray-50 rounded-xl focus:border-blue-500 focus:bg-white outline-none font-medium";

/// Daily settings: order date, store, and the admin credentials to apply them
#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = RwSignal::new(SettingsView::new(today_iso()));

    spawn_local(async move {
        match get_store_options().await {
            Some(stores) => state.update(|s| s.stores_loaded(stores)),
            None => state.update(SettingsView::stores_failed),
        }
    });

    let submit = move |_: ev::MouseEvent| {
        let mut next = state.get_untracked();
        let url = match next.begin_submit(CONFIG.endpoints.settings_script) {
            Ok(url) => url,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        state.set(next);

        spawn_local(async move {
            match submit_settings(url.as_str()).await {
                Some(reply) => state.update(|s| s.finish_submit(&reply)),
                None => state.update(SettingsView::submit_failed),
            }
        });
    };

    let submitting = move || state.with(|s| s.submitting);

    view! {
        <div class="max-w-md mx-auto p-4 md:p-8">
            <div class="bg-white rounded-3xl border border-gray-100 shadow-2xl overflow-hidden">
                <div class="bg-blue-600 p-8 text-center text-white">
                    <h3 class="text-2xl font-bold">"⚙️ 系統初始化"</h3>
                    <p class="text-xs text-blue-100 mt-2 opacity-80 uppercase tracking-widest">
                        "Update daily lunch settings"
                    </p>
                </div>
                <div class="p-8 space-y-5">
                    <div>
                        <label class=LABEL>"今日訂餐日期"</label>
                        <input
                            type="date"
                            class=FIELD
                            prop:value=move || state.with(|s| s.form.date.clone())
                            on:input=move |ev| state.update(|s| s.form.date = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=LABEL>"配合店家選單"</label>
                        <select
                            class=FIELD
                            prop:value=move || state.with(|s| s.form.store.clone())
                            on:change=move |ev| state.update(|s| s.form.store = event_target_value(&ev))
                        >
                            {move || {
                                let stores = state.with(|s| s.stores.clone());
                                if stores.is_empty() {
                                    view! { <option>"載入店家選單中..."</option> }.into_any()
                                } else {
                                    stores
                                        .into_iter()
                                        .map(|store| view! { <option value=store.clone()>{store.clone()}</option> })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </select>
                    </div>
                    <div class="py-2">
                        <div class="border-t-2 border-dashed border-gray-100"></div>
                    </div>
                    <div>
                        <label class=LABEL>"管理員帳號"</label>
                        <input
                            type="text"
                            class=FIELD
                            placeholder="Admin Account"
                            prop:value=move || state.with(|s| s.form.account.clone())
                            on:input=move |ev| state.update(|s| s.form.account = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=LABEL>"管理員密碼"</label>
                        <input
                            type="password"
                            class=FIELD
                            placeholder="Password"
                            prop:value=move || state.with(|s| s.form.password.clone())
                            on:input=move |ev| state.update(|s| s.form.password = event_target_value(&ev))
                        />
                    </div>
                    <button
                        class=move || {
                            if submitting() {
                                "w-full py-4 rounded-2xl font-bold text-white shadow-xl bg-gray-300"
                            } else {
                                "w-full py-4 rounded-2xl font-bold text-white shadow-xl bg-blue-600 hover:bg-blue-700"
                            }
                        }
                        disabled=submitting
                        on:click=submit
                    >
                        {move || if submitting() { "通訊中..." } else { "確認更新系統設定" }}
                    </button>
                    {move || state.with(|s| s.status.clone()).map(|status| {
                        let class = match status.kind {
                            StatusKind::Success => "text-center p-3 rounded-xl text-sm font-bold bg-green-50 text-green-700",
                            StatusKind::Error | StatusKind::Pending => {
                                "text-center p-3 rounded-xl text-sm font-bold bg-red-50 text-red-700"
                            }
                        };
                        view! { <div class=class>{status.message}</div> }
                    })}
                </div>
            </div>
        </div>
    }
}
