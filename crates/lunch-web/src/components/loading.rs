use leptos::prelude::*;

/// Spinner covering the parent while `loading` is set
#[component]
pub fn LoadingOverlay(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="absolute inset-0 bg-white/70 flex items-center justify-center z-[90] rounded-xl">
                <div class="w-10 h-10 border-4 border-blue-500 border-t-transparent rounded-full animate-spin"></div>
            </div>
        </Show>
    }
}
