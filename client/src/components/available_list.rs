//! Column listing shots still on the wheel, in wheel order.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::game::GameState;

#[component]
pub fn AvailableList() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();

    let remaining = move || game.with(|state| state.controller.labels());

    view! {
        <section class="available-list">
            <h2 class="available-list__title">"Available Shots"</h2>
            {move || {
                let shots = remaining();
                if shots.is_empty() {
                    view! { <p class="available-list__empty">"All shots completed!"</p> }.into_any()
                } else {
                    view! {
                        <ul class="available-list__items">
                            {shots
                                .into_iter()
                                .map(|shot| view! { <li class="available-list__item">{shot}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
