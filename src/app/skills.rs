use leptos::{html, prelude::*};
use std::time::Duration;

use super::components::{use_reveal, SectionHeading};
use crate::content::SITE_CONTENT;
use crate::motion::{slide_from, stagger};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let list_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(list_ref);

    view! {
        <section id="skills" class="py-12 md:py-24 overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    lead="My"
                    accent="Skills"
                    subtitle="Expertise and proficiency in various areas of virtual assistance and digital services"
                />
                <div node_ref=list_ref class="mx-auto max-w-3xl mt-12 space-y-8">
                    {SITE_CONTENT
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let row_delay = stagger(i, Duration::ZERO, Duration::from_millis(100));
                            let bar_delay = stagger(
                                i,
                                Duration::from_millis(200),
                                Duration::from_millis(100),
                            );
                            let percentage = skill.percentage;
                            let row_style = move || {
                                if revealed.get() {
                                    format!(
                                        "opacity: 1; transform: translateX(0); transition: all 500ms ease-out {}ms",
                                        row_delay.as_millis(),
                                    )
                                } else {
                                    format!("opacity: 0; transform: translateX({}px)", slide_from(i))
                                }
                            };
                            // width animates from zero once the list is on screen
                            let bar_style = move || {
                                let width = if revealed.get() { percentage } else { 0 };
                                format!(
                                    "width: {width}%; transition: width 1s ease-out {}ms",
                                    bar_delay.as_millis(),
                                )
                            };
                            view! {
                                <div class="space-y-2" style=row_style title=skill.description.clone()>
                                    <div class="flex justify-between">
                                        <span class="font-medium cursor-help">{skill.name.clone()}</span>
                                        <span class="text-blue-500">{format!("{percentage}%")}</span>
                                    </div>
                                    <div class="h-2 w-full rounded-full bg-blue-100 dark:bg-blue-900/30 overflow-hidden">
                                        <div
                                            class="h-full rounded-full bg-gradient-to-r from-blue-400 to-blue-600"
                                            style=bar_style
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
