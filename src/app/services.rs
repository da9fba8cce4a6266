use leptos::prelude::*;
use std::time::Duration;

use super::components::SectionHeading;
use crate::content::SITE_CONTENT;
use crate::motion::stagger;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-12 md:py-24 bg-slate-50 dark:bg-slate-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    lead="My"
                    accent="Services"
                    subtitle="Comprehensive virtual assistance solutions tailored to your needs"
                />
                <div class="mx-auto grid max-w-5xl gap-6 py-12 md:grid-cols-2 lg:grid-cols-4">
                    {SITE_CONTENT
                        .services
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let delay = stagger(i, Duration::ZERO, Duration::from_millis(100));
                            view! {
                                <div
                                    class="flex flex-col rounded-lg border bg-white p-6 shadow-sm transition-all duration-300 hover:-translate-y-2 hover:shadow-lg dark:bg-slate-950 animate-fade-up"
                                    style=format!("animation-delay: {}ms", delay.as_millis())
                                >
                                    <div class="mb-4 flex h-12 w-12 items-center justify-center rounded-full bg-blue-100 text-2xl dark:bg-blue-900/30">
                                        {service.icon.glyph()}
                                    </div>
                                    <h3 class="text-xl font-bold">{service.title.clone()}</h3>
                                    <p class="mt-2 text-gray-500 dark:text-gray-400">
                                        {service.description.clone()}
                                    </p>
                                    <ul class="mt-4 space-y-2 text-sm">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center gap-2">
                                                        <span class="text-blue-500">"✓"</span>
                                                        {feature.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
