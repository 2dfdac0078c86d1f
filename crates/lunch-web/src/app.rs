use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shared::CONFIG;

use crate::components::TabNav;
use crate::dom::current_year;
use crate::pages::{LookupPage, ManagementPage, OrderFormPage, SettingsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-gray-100">
                <header class="bg-white shadow-md sticky top-0 z-50 border-b border-gray-100">
                    <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
                        <div class="flex items-center gap-2">
                            <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center text-white font-black text-lg">
                                "L"
                            </div>
                            <span class="text-lg font-black text-gray-800 hidden sm:block">{CONFIG.name}</span>
                        </div>
                        <TabNav />
                    </div>
                </header>
                <main class="flex-grow container mx-auto px-4 py-8 max-w-5xl">
                    <div class="bg-white rounded-3xl shadow-xl overflow-hidden min-h-[70vh] border border-gray-100">
                        <Routes fallback=|| view! { <p class="p-8">"404 - Page not found"</p> }>
                            <Route path=path!("/") view=OrderFormPage />
                            <Route path=path!("/lookup") view=LookupPage />
                            <Route path=path!("/management") view=ManagementPage />
                            <Route path=path!("/settings") view=SettingsPage />
                        </Routes>
                    </div>
                </main>
                <footer class="bg-gray-800 text-gray-400 py-6 text-center text-[10px] tracking-[0.2em] uppercase font-bold">
                    {format!("© {} Lunch Order Portal • Version {}", current_year(), CONFIG.version)}
                </footer>
            </div>
        </Router>
    }
}
