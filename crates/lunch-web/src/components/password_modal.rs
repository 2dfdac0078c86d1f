use leptos::prelude::*;
use lunch_sheet::view::ManagementView;

/// Password confirmation dialog for a pending delete
#[component]
pub fn PasswordModal(dialog: RwSignal<ManagementView>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || dialog.with(ManagementView::is_open)>
            <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-[100] p-4">
                <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-sm">
                    <h3 class="text-xl font-bold text-gray-800 mb-2">"安全驗證"</h3>
                    <p class="text-sm text-gray-500 mb-6">{move || dialog.with(|d| d.prompt())}</p>
                    <input
                        type="password"
                        class="w-full border-2 border-gray-200 p-3 rounded-xl mb-6 outline-none focus:border-blue-500 text-lg text-center"
                        placeholder="管理密碼"
                        autofocus=true
                        prop:value=move || dialog.with(|d| d.password.clone())
                        on:input=move |ev| dialog.update(|d| d.password = event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                on_confirm.run(());
                            }
                        }
                    />
                    <div class="flex gap-3">
                        <button
                            class="flex-1 py-3 bg-gray-100 hover:bg-gray-200 rounded-xl font-bold"
                            on:click=move |_| dialog.update(ManagementView::cancel)
                        >
                            "取消"
                        </button>
                        <button
                            class="flex-1 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-xl font-bold"
                            on:click=move |_| on_confirm.run(())
                        >
                            "確認執行"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
