mod about;
mod components;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod portfolio;
mod services;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE_CONTENT;
use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = &SITE_CONTENT.profile;
    let name = profile.full_name();
    let description = profile.headline.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=description />

        <Router>
            <div class="flex flex-col min-h-screen">
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Page not found" />
        <section class="container mx-auto px-4 py-24 text-center">
            <h1 class="text-3xl font-bold mb-4">"Page not found."</h1>
            <a href="/" class="text-blue-500 hover:underline">
                "Back to the home page"
            </a>
        </section>
    }
}
