//! Spin and reset buttons.

use leptos::prelude::*;

/// Trigger surface: raises spin and reset requests.
///
/// Spin is disabled while spinning or once the pool is empty; reset is
/// disabled while spinning.
#[component]
pub fn SpinControls<S, R>(
    can_spin: Signal<bool>,
    can_reset: Signal<bool>,
    spinning: Signal<bool>,
    on_spin: S,
    on_reset: R,
) -> impl IntoView
where
    S: Fn(leptos::ev::MouseEvent) + Clone + 'static,
    R: Fn(leptos::ev::MouseEvent) + Clone + 'static,
{
    let spin_label = move || if spinning.get() { "Spinning..." } else { "Start Game" };

    view! {
        <div class="spin-controls">
            <button
                class="btn btn--primary spin-controls__spin"
                on:click=on_spin
                disabled=move || !can_spin.get()
            >
                {spin_label}
            </button>
            <button
                class="btn btn--outlined spin-controls__reset"
                on:click=on_reset
                disabled=move || !can_reset.get()
            >
                "Reset"
            </button>
        </div>
    }
}
