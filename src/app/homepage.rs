use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};
use std::time::Duration;

use super::about::AboutSection;
use super::components::scroll_to_section;
use super::contact::ContactSection;
use super::hero::HeroSection;
use super::portfolio::PortfolioSection;
use super::services::ServicesSection;
use super::skills::SkillsSection;
use crate::nav::hash_target;

/// Gives the sections a frame to lay out before scrolling.
const HASH_SCROLL_DELAY: Duration = Duration::from_millis(100);

fn scroll_to_hash() {
    let hash = match window().location().hash() {
        Ok(hash) => hash,
        Err(e) => {
            log::warn!("could not read location hash: {e:?}");
            return;
        }
    };
    if let Some(id) = hash_target(&hash).map(str::to_string) {
        set_timeout(move || scroll_to_section(&id), HASH_SCROLL_DELAY);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    // effects only run in the browser
    Effect::new(move |_| scroll_to_hash());
    // removed with the page's owner
    let _cleanup = use_event_listener(use_window(), ev::hashchange, move |_| scroll_to_hash());

    view! {
        <Title text="Home" />
        <div class="flex flex-col animate-fade-in">
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ServicesSection />
            <PortfolioSection />
            <ContactSection />
        </div>
    }
}
