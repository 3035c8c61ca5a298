mod animated;
mod contact;
mod experience;
mod footer;
mod hero;
mod launcher;
mod page;
mod projects;
mod skills;
mod stats;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;

use page::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-[#0F172A]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio()
        .map(|content| content.profile.name.clone())
        .unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}
