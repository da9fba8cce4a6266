use leptos::prelude::*;

use crate::content::{copyright_year, SITE_CONTENT};
use crate::nav::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;

    view! {
        <footer class="bg-slate-900 text-white py-8">
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0 animate-fade-up">
                        <h2 class="text-xl font-bold bg-gradient-to-r from-blue-400 to-blue-600 bg-clip-text text-transparent">
                            {profile.first_name.clone()}
                        </h2>
                        <p class="text-sm text-gray-400">{profile.tagline.clone()}</p>
                    </div>
                    <nav
                        class="flex flex-col md:flex-row space-y-2 md:space-y-0 md:space-x-6 animate-fade-up"
                        style="animation-delay: 200ms"
                    >
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.path
                                        rel="external"
                                        class="text-sm hover:text-blue-400 transition-colors duration-300"
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div
                    class="mt-6 pt-6 border-t border-gray-800 flex flex-col md:flex-row justify-between items-center animate-fade-in"
                    style="animation-delay: 400ms"
                >
                    <p class="text-sm text-gray-400 mb-4 md:mb-0">
                        {format!("© {} {}. Made with ", copyright_year(), profile.full_name())}
                        <span class="text-red-500">"♥"</span>
                        " All rights reserved."
                    </p>
                    <div class="flex space-x-4">
                        {profile
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href.clone()
                                        class="text-sm text-gray-400 hover:text-blue-400 transition-all duration-300 hover:-translate-y-1"
                                    >
                                        {social.network.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
