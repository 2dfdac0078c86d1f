use leptos::prelude::*;
use leptos_router::components::A;
use lunch_sheet::view::Tab;

/// Header navigation, one link per tab
///
/// The router marks the current link with `aria-current="page"`.
#[component]
pub fn TabNav() -> impl IntoView {
    view! {
        <nav class="flex space-x-1 sm:space-x-3 overflow-x-auto py-1">
            {Tab::ALL.into_iter().map(|tab| view! {
                <A
                    href=tab.path()
                    exact=true
                    attr:class="px-4 py-2 rounded-xl text-sm font-bold whitespace-nowrap text-gray-500 hover:bg-gray-100 aria-[current=page]:bg-blue-600 aria-[current=page]:text-white"
                >
                    {tab.label()}
                </A>
            }).collect_view()}
        </nav>
    }
}
