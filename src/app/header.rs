use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::contact::{mailto_link, whatsapp_link};
use crate::content::SITE_CONTENT;
use crate::nav::{MobileMenu, NAV_ITEMS};

fn link_class(active: bool, base: &str) -> String {
    let state = if active {
        "text-blue-500"
    } else {
        "text-gray-500 dark:text-gray-400"
    };
    format!("{base} text-sm font-medium transition-colors hover:text-blue-500 {state}")
}

#[component]
pub fn Header() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let menu = RwSignal::new(MobileMenu::default());
    let pathname = use_location().pathname;
    let whatsapp = whatsapp_link(&profile.whatsapp_number, &profile.whatsapp_greeting);
    let mailto = mailto_link(&profile.email);
    let (menu_whatsapp, menu_mailto) = (whatsapp.clone(), mailto.clone());

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur dark:bg-slate-950/95">
            <div class="container mx-auto px-4 flex h-16 items-center justify-between">
                <A
                    href="/"
                    attr:class="text-xl font-bold bg-gradient-to-r from-blue-400 to-blue-600 bg-clip-text text-transparent animate-slide-right"
                >
                    {profile.first_name.clone()}
                </A>

                // rel="external" leaves fragment links to the browser so hashchange fires
                <nav class="hidden md:flex items-center space-x-6">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let item = *item;
                            view! {
                                <a
                                    href=item.path
                                    rel="external"
                                    class=move || {
                                        link_class(
                                            item.is_active(&pathname.get()),
                                            "relative group animate-fade-down",
                                        )
                                    }
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    {item.name}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-blue-500 transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center space-x-3">
                    <a
                        href=whatsapp
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Contact via WhatsApp"
                        class="p-2 rounded-full bg-gradient-to-r from-green-500 to-green-600 text-white hover:shadow-md transition-all duration-300 hover:scale-110"
                    >
                        "💬"
                    </a>
                    <a
                        href=mailto
                        title="Send an Email"
                        class="p-2 rounded-full bg-gradient-to-r from-blue-500 to-blue-600 text-white hover:shadow-md transition-all duration-300 hover:scale-110"
                    >
                        "✉️"
                    </a>
                    <button
                        type="button"
                        class="md:hidden p-2 text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || {
                if !menu.get().is_open() {
                    return Either::Left(());
                }
                Either::Right(
                    view! {
                        <div class="md:hidden border-b bg-white dark:bg-slate-950 animate-fade-down">
                            <div class="container mx-auto px-4 py-4 space-y-3">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| {
                                        let item = *item;
                                        view! {
                                            <a
                                                href=item.path
                                                rel="external"
                                                class=move || {
                                                    link_class(item.is_active(&pathname.get()), "block py-2")
                                                }
                                                on:click=move |_| menu.update(MobileMenu::close)
                                            >
                                                {item.name}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <div class="flex items-center space-x-3 py-2">
                                    <a
                                        href=menu_whatsapp.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-sm font-medium text-green-600 dark:text-green-400"
                                    >
                                        "💬 WhatsApp"
                                    </a>
                                    <a
                                        href=menu_mailto.clone()
                                        class="text-sm font-medium text-blue-600 dark:text-blue-400"
                                    >
                                        "✉️ Email"
                                    </a>
                                </div>
                            </div>
                        </div>
                    },
                )
            }}
        </header>
    }
}
