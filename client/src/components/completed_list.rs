//! Column listing shots already drawn, in draw order.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::game::GameState;

#[component]
pub fn CompletedList() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();

    let completed = move || {
        game.with(|state| {
            state
                .controller
                .history()
                .iter()
                .map(|item| item.label.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="completed-list">
            <h2 class="completed-list__title">"Completed Shots"</h2>
            {move || {
                let shots = completed();
                if shots.is_empty() {
                    view! { <p class="completed-list__empty">"No shots completed yet."</p> }.into_any()
                } else {
                    view! {
                        <ol class="completed-list__items">
                            {shots
                                .into_iter()
                                .map(|shot| view! { <li class="completed-list__item">{shot}</li> })
                                .collect::<Vec<_>>()}
                        </ol>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
