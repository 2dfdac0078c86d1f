use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_sheet::view::ManagementView;
use lunch_sheet::{DeleteRequest, DeleteTarget, Order, OrderBook, RequestError};

use crate::api::{delete_orders, fetch_orders};
use crate::components::{LoadingOverlay, PasswordModal};
use crate::dom::alert;

/// Order back office: list submissions and delete them
#[component]
pub fn ManagementPage() -> impl IntoView {
    let book = RwSignal::new(OrderBook::default());
    let loading = RwSignal::new(false);
    let dialog = RwSignal::new(ManagementView::default());

    let refresh = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_orders().await {
                Some(loaded) => book.set(loaded),
                None => alert("無法連結 CSV 資料庫"),
            }
            loading.set(false);
        });
    };
    refresh();

    let send = move |request: DeleteRequest| {
        loading.set(true);
        spawn_local(async move {
            match delete_orders(&request).await {
                Some(response) => {
                    alert(&response.message);
                    if response.is_success() {
                        refresh();
                    }
                }
                None => alert("伺服器通訊錯誤"),
            }
            loading.set(false);
        });
    };

    let confirm = Callback::new(move |()| {
        let mut state = dialog.get_untracked();
        let result = state.confirm();
        dialog.set(state);

        match result {
            Ok(request) => send(request),
            Err(RequestError::NothingPending) => {}
            Err(e) => alert(&e.to_string()),
        }
    });

    view! {
        <div class="p-4 md:p-6 relative">
            <div class="flex flex-col sm:flex-row justify-between items-center gap-4 mb-6">
                <h3 class="font-bold text-xl text-gray-800">"📋 訂單後台管理"</h3>
                <div class="flex gap-2">
                    <button
                        class="text-sm px-4 py-2 border border-gray-300 rounded-lg hover:bg-white bg-gray-50 shadow-sm"
                        on:click=move |_| refresh()
                    >
                        "🔄 刷新資料"
                    </button>
                    <button
                        class="text-sm px-4 py-2 border border-red-200 text-red-600 rounded-lg hover:bg-red-600 hover:text-white bg-red-50 shadow-sm"
                        on:click=move |_| dialog.update(|d| d.open(DeleteTarget::All))
                    >
                        "🗑️ 全部清空"
                    </button>
                </div>
            </div>

            <div class="overflow-x-auto rounded-xl border border-gray-200 shadow-md">
                <table class="w-full text-sm">
                    <thead class="bg-gray-100 border-b border-gray-200">
                        <tr>
                            <th class="p-3 text-gray-600">"時間"</th>
                            <th class="p-3 text-gray-600">"人員"</th>
                            <th class="p-3 text-gray-600">"品項"</th>
                            <th class="p-3 text-gray-600">"數量"</th>
                            <th class="p-3 text-gray-600">"備註"</th>
                            <th class="p-3 text-gray-600">"操作"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 bg-white">
                        {move || book.with(|book| {
                            if book.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="p-20 text-center text-gray-400 font-medium">
                                            "資料庫目前無任何訂單"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                book.orders()
                                    .iter()
                                    .map(|order| order_row(order, dialog))
                                    .collect_view()
                                    .into_any()
                            }
                        })}
                    </tbody>
                </table>
            </div>

            <PasswordModal dialog=dialog on_confirm=confirm />
            <LoadingOverlay loading=loading />
        </div>
    }
}

fn order_row(order: &Order, dialog: RwSignal<ManagementView>) -> impl IntoView + use<> {
    let target = DeleteTarget::Row(order.sheet_row);

    view! {
        <tr class="hover:bg-gray-50">
            <td class="p-3 text-center text-gray-500">{order.date().to_string()}</td>
            <td class="p-3 text-center font-bold text-gray-700">{order.staff.clone()}</td>
            <td class="p-3 text-center">{order.item.clone()}</td>
            <td class="p-3 text-center font-bold text-blue-600">{order.quantity.clone()}</td>
            <td class="p-3 text-xs text-gray-400 max-w-[120px] truncate">{order.note.clone()}</td>
            <td class="p-3 text-center">
                <button
                    class="text-xs font-bold px-3 py-1.5 bg-red-50 text-red-500 border border-red-200 rounded-md hover:bg-red-500 hover:text-white"
                    on:click=move |_| dialog.update(|d| d.open(target))
                >
                    "刪除"
                </button>
            </td>
        </tr>
    }
}
