use leptos::prelude::*;
use shared::CONFIG;

use crate::components::Section;

/// The ordering form itself is a Google Form; we only embed it
#[component]
pub fn OrderFormPage() -> impl IntoView {
    view! {
        <Section title="📝 填寫訂單">
            <iframe
                src=CONFIG.endpoints.order_form
                class="w-full flex-grow border-none min-h-[2000px]"
                title="Form"
            >
                "載入中..."
            </iframe>
        </Section>
    }
}
