use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{image_or_placeholder, load_failed, PLACEHOLDER_IMAGE};
use crate::motion::{PointerOffset, Ripples, RIPPLE_DURATION};

pub fn pointer_offset(rect: &web_sys::DomRect, ev: &MouseEvent) -> PointerOffset {
    PointerOffset::within(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Smooth-scrolls the element with the given id into view.
pub fn scroll_to_section(id: &str) {
    let el = match document().query_selector(&format!("#{id}")) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("no section with id '{id}'");
            return;
        }
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Flips to `true` the first time the target scrolls into view and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed.into()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Solid,
    Outline,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            Self::Solid => "bg-blue-500 text-white hover:bg-blue-600",
            Self::Outline => "border border-blue-300 bg-transparent hover:bg-blue-50 dark:border-blue-700 dark:hover:bg-blue-900/30",
        }
    }
}

#[component]
pub fn RippleButton(
    #[prop(into)] variant: Signal<ButtonStyle>,
    #[prop(into, optional)] class: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let button_ref = NodeRef::<html::Button>::new();
    let ripples = RwSignal::new(Ripples::default());

    let add_ripple = move |ev: MouseEvent| {
        if let Some(el) = button_ref.get_untracked() {
            let offset = pointer_offset(&el.get_bounding_client_rect(), &ev);
            let mut id = 0;
            ripples.update(|r| id = r.spawn(offset));
            set_timeout(move || ripples.update(|r| r.remove(id)), RIPPLE_DURATION);
        }
        on_click.run(());
    };

    view! {
        <button
            node_ref=button_ref
            type="button"
            class=move || {
                format!(
                    "relative overflow-hidden inline-flex items-center justify-center px-5 py-2 text-sm font-medium rounded-md transition-all duration-300 {} {}",
                    variant.get().class(),
                    class,
                )
            }
            on:click=add_ripple
        >
            {move || {
                ripples
                    .with(|r| {
                        r.active()
                            .iter()
                            .map(|ripple| {
                                view! {
                                    <span
                                        class="absolute bg-white/30 rounded-full pointer-events-none animate-ripple"
                                        style=ripple.css()
                                    ></span>
                                }
                            })
                            .collect_view()
                    })
            }}
            {children()}
        </button>
    }
}

/// An `<img>` that swaps to the placeholder when the source fails to load.
///
/// A server-rendered image can fail before hydration attaches `on:error`, so
/// the element is also checked once it is mounted.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
    width: u32,
    height: u32,
) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let (src, set_src) = signal(image_or_placeholder(&src).to_string());
    let fall_back = move || {
        log::debug!("image failed to load: {}", src.get_untracked());
        set_src.set(PLACEHOLDER_IMAGE.to_string());
    };

    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if load_failed(&src.get_untracked(), img.complete(), img.natural_width()) {
                fall_back();
            }
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            class=class
            on:error=move |_| {
                if src.get_untracked() != PLACEHOLDER_IMAGE {
                    fall_back();
                }
            }
        />
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] lead: String,
    #[prop(into)] accent: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center space-y-4 text-center animate-fade-up">
            <div class="space-y-2">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                    {lead} " " <span class="text-blue-400">{accent}</span>
                </h2>
                <p class="mx-auto max-w-[700px] text-gray-500 md:text-xl dark:text-gray-400">
                    {subtitle}
                </p>
            </div>
        </div>
    }
}
