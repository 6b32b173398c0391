use crate::pages::{HEADING, HomePage};
use leptos::prelude::*;
use leptos_darkmode::Darkmode;
use leptos_meta::{Html, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub const FAVICON: &str = "/favicon.ico";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    let stylesheet = format!("/pkg/{}.css", options.output_name);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <link rel="shortcut icon" type="image/ico" href=FAVICON />
                <Title text=HEADING />
            </head>

            <body class="bg-white dark:bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let darkmode = Darkmode::init();
    view! {
        <Html class:dark=move || darkmode.is_dark() />
        <Router>
            <main class="flex flex-col items-center justify-start min-h-screen pt-8 p-4">
                <Routes fallback=|| "Page not found".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::FAVICON;
    use std::path::Path;

    #[test]
    fn favicon_is_shipped_in_assets_dir() {
        let icon = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        let bytes = std::fs::read(&icon).unwrap();
        // ICO header: reserved 0, type 1
        assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
    }
}
