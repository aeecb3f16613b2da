//! Spinning wheel: SVG wedges, label overlays, and the result hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything drawn here comes from `WheelProps` and `WheelGeometry`. The
//! wheel element carries the CSS rotation/transition for the current phase,
//! so the browser interpolates the spin and snaps back to 0° at rest.

use leptos::prelude::*;
use spinner::WheelProps as SpinnerWheelProps;
use spinner::wheel::WheelGeometry;

/// The wheel itself. Render only when `props.labels` is non-empty.
#[component]
pub fn Wheel(#[prop(into)] props: Signal<SpinnerWheelProps>) -> impl IntoView {
    let geometry = WheelGeometry::default();
    let size = geometry.size;
    let label_width = format!("{}px", geometry.label_width());

    let segments = move || props.with(|p| p.segments(&geometry));
    let wheel_style = move || {
        let motion = props.with(SpinnerWheelProps::motion);
        format!(
            "width: {size}px; height: {size}px; transform: {}; transition: {};",
            motion.css_transform(),
            motion.css_transition()
        )
    };
    let hub_class = move || {
        if props.with(|p| p.is_spinning) {
            "wheel__hub wheel__hub--spinning"
        } else {
            "wheel__hub"
        }
    };
    let hub_text = move || props.with(|p| p.hub_text().to_owned());

    view! {
        <div class="wheel" style=wheel_style>
            <svg class="wheel__face" width=size height=size viewBox=geometry.view_box()>
                {move || {
                    segments()
                        .into_iter()
                        .map(|segment| {
                            view! {
                                <path d=segment.path fill=segment.fill stroke="#fff" stroke-width="1"></path>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
            <div class="wheel__labels">
                {move || {
                    segments()
                        .into_iter()
                        .map(|segment| {
                            view! {
                                <span
                                    class="wheel__label"
                                    style:transform=geometry.label_transform(segment.mid_deg)
                                    style:width=label_width.clone()
                                    style:color=segment.label_color
                                >
                                    {segment.label}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class=hub_class>{hub_text}</div>
        </div>
    }
}
