use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

use super::components::SectionHeading;
use crate::contact::{mailto_link, whatsapp_link, ContactField, ContactForm, ACKNOWLEDGEMENT};
use crate::content::SITE_CONTENT;

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let form = RwSignal::new(ContactForm::default());
    let whatsapp = whatsapp_link(&profile.whatsapp_number, &profile.whatsapp_greeting);

    let on_input = move |ev: Event| {
        let Some(name) = event_target::<web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        form.update(|f| {
            if let Err(e) = f.update(&name, value) {
                log::warn!("{e}");
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submitted = match form.try_update(ContactForm::submit) {
            Some(Ok(submitted)) => submitted,
            Some(Err(e)) => {
                log::warn!("{e}");
                return;
            }
            None => return,
        };
        log::info!("Form submitted: {submitted:?}");
        let window = window();
        if let Err(e) = window.alert_with_message(ACKNOWLEDGEMENT) {
            log::warn!("alert failed: {e:?}");
        }
        // no mail backend, hand the message to the visitor's mail client
        if let Err(e) = window
            .location()
            .set_href(&submitted.mailto_draft(&SITE_CONTENT.profile.email))
        {
            log::warn!("could not open mail draft: {e:?}");
        }
    };

    view! {
        <section id="contact" class="py-12 md:py-24 bg-slate-50 dark:bg-slate-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    lead="Get In"
                    accent="Touch"
                    subtitle="Let's discuss how I can help you achieve your goals"
                />
                <div class="mx-auto grid max-w-5xl gap-8 py-12 lg:grid-cols-2">
                    <div class="space-y-6 animate-slide-right">
                        <h3 class="text-xl font-bold">"Contact Information"</h3>
                        <div class="flex items-start gap-4">
                            <div class="rounded-full bg-green-100 p-3 dark:bg-green-900/30">"💬"</div>
                            <div>
                                <p class="font-medium">"WhatsApp"</p>
                                <a
                                    href=whatsapp.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-500 hover:text-green-600 dark:text-gray-400"
                                >
                                    {profile.whatsapp_display.clone()}
                                </a>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class="rounded-full bg-blue-100 p-3 dark:bg-blue-900/30">"✉️"</div>
                            <div>
                                <p class="font-medium">"Email"</p>
                                <a
                                    href=mailto_link(&profile.email)
                                    class="text-gray-500 hover:text-blue-600 dark:text-gray-400"
                                >
                                    {profile.email.clone()}
                                </a>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class="rounded-full bg-blue-100 p-3 dark:bg-blue-900/30">"🕘"</div>
                            <div>
                                <p class="font-medium">"Working Hours"</p>
                                {profile
                                    .working_hours
                                    .iter()
                                    .map(|line| {
                                        view! {
                                            <p class="text-gray-500 dark:text-gray-400">{line.clone()}</p>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="space-y-2">
                            <h4 class="font-medium">"Connect With Me"</h4>
                            <div class="flex gap-3">
                                {profile
                                    .socials
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href.clone()
                                                class="rounded-full bg-blue-100 px-3 py-2 text-sm transition-colors hover:bg-blue-200 dark:bg-blue-900/30"
                                            >
                                                {social.network.clone()}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="rounded-lg border bg-white p-6 shadow-sm dark:bg-slate-950 animate-slide-left">
                        <h3 class="text-xl font-bold mb-4">"Send Me a Message"</h3>
                        <form class="space-y-4" on:submit=on_submit>
                            {ContactField::ALL
                                .into_iter()
                                .map(|field| view! { <FormField field=field form=form on_input=on_input /> })
                                .collect_view()}
                            <button
                                type="submit"
                                class="w-full rounded-md bg-gradient-to-r from-blue-500 to-blue-600 px-4 py-2 font-medium text-white transition-all duration-300 hover:scale-[1.02]"
                            >
                                "Send Message"
                            </button>
                        </form>
                        <p class="mt-4 text-center text-sm text-gray-500 dark:text-gray-400">
                            <a
                                href=whatsapp
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-green-600"
                            >
                                "Or contact me via WhatsApp"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: ContactField,
    form: RwSignal<ContactForm>,
    on_input: impl Fn(Event) + Copy + 'static,
) -> impl IntoView {
    let (label, placeholder) = match field {
        ContactField::Name => ("Name", "John Doe"),
        ContactField::Email => ("Email", "john@example.com"),
        ContactField::Subject => ("Subject", "How can I help you?"),
        ContactField::Message => ("Message", "Type your message here..."),
    };
    let name = field.as_str();
    let value = move || form.with(|f| f.get(field).to_string());
    let input_class = "w-full rounded-md border px-3 py-2 text-sm dark:bg-slate-900";

    let input = if field == ContactField::Message {
        view! {
            <textarea
                id=name
                name=name
                placeholder=placeholder
                rows="5"
                required
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let kind = if field == ContactField::Email { "email" } else { "text" };
        view! {
            <input
                id=name
                name=name
                type=kind
                placeholder=placeholder
                required
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="space-y-2">
            <label for=name class="text-sm font-medium">
                {label}
            </label>
            {input}
        </div>
    }
}
