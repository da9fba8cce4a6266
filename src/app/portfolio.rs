use leptos::{either::Either, ev::MouseEvent, html, prelude::*};
use std::time::Duration;

use super::components::{pointer_offset, ButtonStyle, FallbackImage, RippleButton, SectionHeading};
use crate::content::SITE_CONTENT;
use crate::motion::{stagger, Tilt, TiltProfile};
use crate::portfolio::{Filter, PortfolioItem, FILTER_BUTTONS};

const RAISED_SHADOW: &str = "box-shadow: 0 15px 30px rgba(0,0,0,0.2)";

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let filter = RwSignal::new(Filter::default());

    view! {
        <section id="portfolio" class="py-12 md:py-24">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    lead="My"
                    accent="Portfolio"
                    subtitle="Showcasing some of my best work across different domains"
                />
                <div class="mt-8 flex flex-wrap justify-center gap-2">
                    {FILTER_BUTTONS
                        .into_iter()
                        .enumerate()
                        .map(|(i, button)| {
                            let variant = Signal::derive(move || {
                                if filter.get() == button {
                                    ButtonStyle::Solid
                                } else {
                                    ButtonStyle::Outline
                                }
                            });
                            view! {
                                <div
                                    class="animate-fade-up"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    <RippleButton
                                        variant=variant
                                        class="rounded-full hover:scale-105"
                                        on_click=move |_| {
                                            log::debug!("portfolio filter: {button}");
                                            filter.set(button);
                                        }
                                    >
                                        {button.label()}
                                    </RippleButton>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // rebuilt on every filter change so the entrance animation replays
                {move || {
                    let active = filter.get();
                    let items = active.apply(&SITE_CONTENT.portfolio);
                    if items.is_empty() {
                        return Either::Left(
                            view! {
                                <p class="mt-8 text-center text-gray-500 dark:text-gray-400">
                                    {format!("No projects in {active} yet.")}
                                </p>
                            },
                        );
                    }
                    Either::Right(
                        view! {
                            <div class="mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, item)| view! { <PortfolioCard item=item index=i /> })
                                    .collect_view()}
                            </div>
                        },
                    )
                }}
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: &'static PortfolioItem, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let card = TiltProfile::CARD;
    let (tilt, set_tilt) = signal(None::<Tilt>);
    let delay = stagger(index, Duration::ZERO, Duration::from_millis(100));
    let author = SITE_CONTENT.profile.full_name();

    let on_move = move |ev: MouseEvent| {
        if let Some(el) = card_ref.get_untracked() {
            let offset = pointer_offset(&el.get_bounding_client_rect(), &ev);
            set_tilt.set(Some(card.tilt(offset)));
        }
    };

    let style = move || match tilt.get() {
        Some(t) => format!("{}; {RAISED_SHADOW}", t.css()),
        None => Tilt::REST.css(),
    };

    // the entrance animation sits on a wrapper so it never holds the tilt transform
    view! {
        <div class="animate-fade-up" style=format!("animation-delay: {}ms", delay.as_millis())>
            <div
                node_ref=card_ref
                class="group relative overflow-hidden rounded-lg shadow-md transition-all duration-500 ease-out"
                style=style
                on:mousemove=on_move
                on:mouseleave=move |_| set_tilt.set(None)
            >
                <div class="relative h-60 w-full overflow-hidden">
                    <div class="w-full h-full ken-burns-effect">
                        <FallbackImage
                            src=item.image.clone()
                            alt=item.alt_text(&author)
                            width=400
                            height=300
                            class="h-full w-full object-cover"
                        />
                    </div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-end p-4">
                        <h3 class="text-white font-bold text-lg">{item.title.clone()}</h3>
                        <p class="text-white/80 text-sm line-clamp-2 mt-1">{item.description.clone()}</p>
                        <div class="flex flex-wrap gap-1 mt-2">
                            {item
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="text-xs bg-blue-500/80 text-white px-2 py-0.5 rounded-full">
                                            {tech.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-2 mt-3">
                            {item
                                .demo_link
                                .clone()
                                .map(|href| {
                                    view! { <ProjectLink href=href title="View Demo" glyph="👁" /> }
                                })}
                            {item
                                .github_link
                                .clone()
                                .map(|href| {
                                    view! { <ProjectLink href=href title="View Code" glyph="⌨" /> }
                                })}
                            {item
                                .demo_link
                                .clone()
                                .map(|href| {
                                    view! {
                                        <ProjectLink href=href title="Visit Project" glyph="↗" class="ml-auto" />
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(
    href: String,
    title: &'static str,
    glyph: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            title=title
            class=format!(
                "bg-white/20 hover:bg-white/30 p-2 rounded-full text-white text-sm transition-colors {class}",
            )
        >
            {glyph}
        </a>
    }
}
