mod contact;
mod cursor;
mod dom;
mod footer;
mod homepage;
mod navbar;
mod projects;
mod services;
mod stepper;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SITE_DESCRIPTION, SITE_NAME, SITE_URL};

use cursor::{provide_cursor, CustomCursor};
use homepage::HomePage;
use navbar::Navbar;
use stepper::ScrollProgressBar;
use theme::{provide_theme, PageFlip};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
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
    provide_theme();
    provide_cursor();

    view! {
        <Title formatter=|title| format!("{SITE_NAME} - {title}") />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta property="og:title" content=SITE_NAME />
        <Meta property="og:url" content=SITE_URL />

        <Router>
            <PageFlip>
                <ScrollProgressBar />
                <Navbar />
                <main class="flex flex-col w-full">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </PageFlip>
            <CustomCursor />
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
        <Title text="Page Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <h1 class="text-6xl font-serif font-bold">"404"</h1>
            <p class="text-lg text-muted max-w-md">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="btn btn-primary">
                "Back home"
            </A>
        </section>
    }
}
