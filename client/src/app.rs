//! Root application component with routing and the game state context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::game::GameState;
use crate::util::entropy::entropy_seed;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the game state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let game = RwSignal::new(GameState::default());
    provide_context(game);

    // Effects only run in the browser, so the server-rendered markup never
    // depends on a random draw and hydration stays consistent.
    Effect::new(move || {
        game.update(|state| {
            state.reseed(entropy_seed());
            state.refresh_fact();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shot-spinner.css"/>
        <Title text="Soccer Shot Spinner"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
