use leptos::{ev::MouseEvent, html, prelude::*};

use super::components::{pointer_offset, scroll_to_section, ButtonStyle, FallbackImage, RippleButton};
use crate::content::SITE_CONTENT;
use crate::motion::TiltProfile;

#[component]
pub fn HeroSection() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let section_ref = NodeRef::<html::Section>::new();
    let hero_tilt = TiltProfile::HERO;
    let (tilt, set_tilt) = signal(hero_tilt.rest);

    // the whole section is the hit area, the portrait is what turns
    let on_move = move |ev: MouseEvent| {
        if let Some(el) = section_ref.get_untracked() {
            let offset = pointer_offset(&el.get_bounding_client_rect(), &ev);
            set_tilt.set(hero_tilt.tilt(offset));
        }
    };

    view! {
        <section
            node_ref=section_ref
            class="py-12 md:py-24 overflow-hidden"
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.set(hero_tilt.rest)
        >
            <div class="container mx-auto px-4 md:px-6">
                <div class="grid gap-6 lg:grid-cols-2 lg:gap-12 items-center">
                    <div class="flex flex-col justify-center space-y-4 animate-slide-right">
                        <div class="space-y-2">
                            <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                                "Hello, I'm "
                                <span class="text-blue-400">{profile.first_name.clone()}</span>
                                " "
                                <span class="text-blue-200">{profile.last_name.clone()}</span>
                            </h1>
                            <p
                                class="text-gray-500 md:text-xl dark:text-gray-400 animate-fade-in"
                                style="animation-delay: 300ms"
                            >
                                {profile.headline.clone()}
                            </p>
                        </div>
                        <div
                            class="flex flex-col sm:flex-row gap-3 animate-fade-up"
                            style="animation-delay: 600ms"
                        >
                            <RippleButton
                                variant=ButtonStyle::Solid
                                class="bg-gradient-to-r from-blue-500 to-blue-600 hover:scale-105"
                                on_click=move |_| scroll_to_section("contact")
                            >
                                "Hire Me"
                            </RippleButton>
                            <RippleButton
                                variant=ButtonStyle::Outline
                                class="hover:scale-105"
                                on_click=move |_| scroll_to_section("portfolio")
                            >
                                "View Portfolio"
                            </RippleButton>
                        </div>
                    </div>
                    <div class="flex justify-center animate-zoom-in" style="animation-delay: 200ms">
                        <div
                            class="relative w-[300px] h-[300px] transition-transform duration-500 ease-out"
                            style=move || tilt.get().css()
                        >
                            <div class="absolute inset-0 bg-gradient-to-br from-blue-400/20 to-purple-500/20 rounded-full animate-pulse [animation-duration:3s]"></div>
                            <div class="rounded-full overflow-hidden border-4 border-blue-100 dark:border-blue-900 relative z-10 w-[300px] h-[300px]">
                                <div class="w-full h-full ken-burns-effect">
                                    <FallbackImage
                                        src=profile.portrait.clone()
                                        alt=format!(
                                            "{} - Professional Virtual Assistant and Remote Expert",
                                            profile.full_name(),
                                        )
                                        width=300
                                        height=300
                                        class="object-cover w-full h-full"
                                    />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
