use leptos::prelude::*;

/// Page section with a tinted title bar
#[component]
pub fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="flex flex-col">
            <div class="bg-blue-50 p-4 border-b border-blue-100 flex justify-center items-center">
                <h2 class="text-lg font-bold text-blue-800">{title}</h2>
            </div>
            {children()}
        </section>
    }
}
