use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::PageVariant;
use crate::ui::pages::{LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/logo.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-[#f5fff8] font-sans text-sa-ink antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/smartagenda.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment(PageVariant::Classic.segment())
                    view=|| view! { <LandingPage variant=PageVariant::Classic/> }
                />
                <Route
                    path=StaticSegment(PageVariant::Focus.segment())
                    view=|| view! { <LandingPage variant=PageVariant::Focus/> }
                />
                <Route
                    path=StaticSegment(PageVariant::Campaign.segment())
                    view=|| view! { <LandingPage variant=PageVariant::Campaign/> }
                />
            </Routes>
        </Router>
    }
}
