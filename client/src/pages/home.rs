//! Home page: completed shots, the wheel with its pointer and controls,
//! available shots, the scoreboard, and the fact of the day.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires the trigger surface to the settlement
//! timer and decides between the wheel and the terminal "all shots
//! completed" panel, so a wheel with zero wedges is never rendered.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::available_list::AvailableList;
use crate::components::completed_list::CompletedList;
use crate::components::spin_controls::SpinControls;
use crate::components::wheel::Wheel;
use crate::state::game::GameState;
use crate::util::settle_timer::SettleTimer;

#[component]
pub fn HomePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let timer = SettleTimer::new(game);

    let wheel_props = Signal::derive(move || game.with(|state| state.controller.wheel_props()));
    let can_spin = Signal::derive(move || game.with(|state| state.controller.can_spin()));
    let can_reset = Signal::derive(move || game.with(|state| state.controller.can_reset()));
    let spinning = Signal::derive(move || game.with(|state| state.controller.is_spinning()));
    let exhausted = move || game.with(|state| state.controller.is_exhausted());
    let status = move || game.with(|state| state.controller.status_text());
    let result = move || game.with(|state| state.controller.result().map(str::to_owned));
    let fact = move || game.with(|state| state.fact.unwrap_or_default());
    let scoreboard = move || game.with(|state| state.controller.scoreboard_text());

    let spin_timer = timer.clone();
    let on_spin = move |_: leptos::ev::MouseEvent| spin_timer.request_spin();
    let on_reset = move |_: leptos::ev::MouseEvent| timer.request_reset();

    view! {
        <main class="spinner-page">
            <h1 class="spinner-page__title">"Soccer Shot Spinner"</h1>
            <div class="spinner-page__grid">
                <CompletedList/>
                <div class="spinner-page__stage">
                    <div class="spinner-page__wheel-slot">
                        {move || {
                            if exhausted() {
                                view! {
                                    <div class="wheel-complete">
                                        {move || status().unwrap_or_default()}
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! { <Wheel props=wheel_props/> }.into_any()
                            }
                        }}
                        <div class="spinner-pointer"></div>
                    </div>
                    <SpinControls
                        can_spin=can_spin
                        can_reset=can_reset
                        spinning=spinning
                        on_spin=on_spin
                        on_reset=on_reset
                    />
                    {move || {
                        result()
                            .map(|shot| view! { <p class="spinner-page__result">"Your shot: " {shot}</p> })
                    }}
                </div>
                <AvailableList/>
            </div>
            <p class="spinner-page__scoreboard">{scoreboard}</p>
            <aside class="fact-card">
                <h2 class="fact-card__title">"Soccer Fact of the Day"</h2>
                <p class="fact-card__body">{fact}</p>
            </aside>
        </main>
    }
}
