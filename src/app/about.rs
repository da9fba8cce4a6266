use leptos::{ev::MouseEvent, html, prelude::*};

use super::components::{pointer_offset, use_reveal, FallbackImage, SectionHeading};
use crate::content::SITE_CONTENT;
use crate::motion::{stagger, Tilt, TiltProfile};
use std::time::Duration;

const SETTLE: Duration = Duration::from_millis(1000);

#[component]
pub fn AboutSection() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let portrait_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(portrait_ref);
    let portrait = TiltProfile::PORTRAIT;
    // None while the pointer is away and the float animation owns the transform
    let (tilt, set_tilt) = signal(None::<Tilt>);

    let on_move = move |ev: MouseEvent| {
        if let Some(el) = portrait_ref.get_untracked() {
            let offset = pointer_offset(&el.get_bounding_client_rect(), &ev);
            set_tilt.set(Some(portrait.tilt(offset)));
        }
    };

    // ease back to the rest pose, then hand over to the float animation
    let on_leave = move |_| {
        set_tilt.set(Some(portrait.rest));
        set_timeout(
            move || {
                if tilt.get_untracked() == Some(portrait.rest) {
                    set_tilt.set(None);
                }
            },
            SETTLE,
        );
    };

    let portrait_class = move || {
        let motion = match (revealed.get(), tilt.get()) {
            (false, _) => "",
            (true, None) => "animate-float",
            (true, Some(t)) if t == portrait.rest => "transition-transform duration-1000 ease-out",
            (true, Some(_)) => "transition-transform duration-500 ease-out",
        };
        format!("relative {motion}")
    };
    let portrait_style = move || tilt.get().map(|t| t.css()).unwrap_or_default();

    let facts = [
        ("📅", "Birthday", profile.birthday.clone()),
        ("📍", "Location", profile.location.clone()),
        ("✉️", "Email", profile.email.clone()),
        ("💬", "WhatsApp", profile.whatsapp_display.clone()),
    ];

    view! {
        <section id="about" class="py-12 md:py-24 bg-slate-50 dark:bg-slate-900 overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    lead="About"
                    accent="Me"
                    subtitle="Get to know me better and discover what drives my passion for excellence"
                />
                <div class="mt-12 grid gap-8 md:grid-cols-2 items-start">
                    <div class="flex justify-center animate-slide-right">
                        <div
                            node_ref=portrait_ref
                            class=portrait_class
                            style=portrait_style
                            on:mousemove=on_move
                            on:mouseleave=on_leave
                        >
                            <div class="absolute -inset-4 bg-gradient-to-tr from-blue-200 to-blue-400 rounded-lg opacity-30 blur-xl dark:from-blue-700 dark:to-blue-900"></div>
                            <div class="rounded-lg overflow-hidden relative z-10 shadow-xl">
                                <div class="w-full h-full ken-burns-effect">
                                    <FallbackImage
                                        src=profile.portrait.clone()
                                        alt=format!("{} - Professional headshot", profile.full_name())
                                        width=400
                                        height=500
                                        class="object-cover"
                                    />
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6 animate-slide-left">
                        <h3 class="text-2xl font-bold">{profile.full_name()}</h3>
                        <p class="text-gray-500 dark:text-gray-400">{profile.bio.clone()}</p>

                        <div class="grid gap-4 md:grid-cols-2">
                            {facts
                                .into_iter()
                                .enumerate()
                                .map(|(i, (icon, label, value))| {
                                    let delay = stagger(
                                        i,
                                        Duration::from_millis(200),
                                        Duration::from_millis(100),
                                    );
                                    view! {
                                        <div
                                            class="flex items-center gap-2 animate-fade-up"
                                            style=format!("animation-delay: {}ms", delay.as_millis())
                                        >
                                            <div class="bg-blue-100 p-2 rounded-full dark:bg-blue-900/30">
                                                {icon}
                                            </div>
                                            <div>
                                                <p class="font-medium">{label}</p>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    {value}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="space-y-4">
                            <h4 class="text-xl font-bold">"Professional Experience"</h4>
                            <div class="space-y-2">
                                {profile
                                    .experience
                                    .iter()
                                    .enumerate()
                                    .map(|(i, job)| {
                                        let delay = stagger(
                                            i,
                                            Duration::from_millis(200),
                                            Duration::from_millis(100),
                                        );
                                        view! {
                                            <div
                                                class="flex items-start gap-2 animate-slide-right"
                                                style=format!("animation-delay: {}ms", delay.as_millis())
                                            >
                                                <div class="mt-1 h-4 w-4 rounded-full bg-gradient-to-r from-blue-400 to-blue-500 flex-shrink-0"></div>
                                                <div>
                                                    <h5 class="font-medium">{job.role.clone()}</h5>
                                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                                        {job.summary.clone()}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
