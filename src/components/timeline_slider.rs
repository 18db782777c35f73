//! Timeline Slider
//!
//! Drag or tap along the track to cross-fade a detail page between its
//! two background layers. Move and release listeners live on the
//! document so a drag keeps tracking when the pointer leaves the
//! control; each instance gates them with its own dragging flag, so
//! concurrent sliders never interfere.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Starting position, percent.
pub const INITIAL_POSITION: f64 = 50.0;

/// Clamp a slider position into the valid percent range.
pub(crate) fn clamp_percent(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0)
}

/// Linear cross-fade: layer 1 fades out as layer 2 fades in.
pub(crate) fn layer_opacities(percent: f64) -> (f64, f64) {
    (1.0 - percent / 100.0, percent / 100.0)
}

/// Project a pointer x coordinate onto the track, as an unclamped
/// percentage of the track width.
pub(crate) fn track_percent(client_x: f64, track_left: f64, track_width: f64) -> f64 {
    (client_x - track_left) / track_width * 100.0
}

/// Timeline slider bound to a shared position signal; the owning
/// detail page derives its layer opacities from the same signal.
#[component]
pub fn TimelineSlider(position: RwSignal<f64>) -> impl IntoView {
    let dragging = create_rw_signal(false);
    let slider_ref = create_node_ref::<html::Div>();
    let track_ref = create_node_ref::<html::Div>();

    let move_to = move |client_x: f64| {
        if let Some(track) = track_ref.get_untracked() {
            let rect = track.get_bounding_client_rect();
            let percent = track_percent(client_x, rect.left(), rect.width());
            position.set(clamp_percent(percent));
        }
    };

    // Pointer-down on the handle begins a drag without moving it.
    let on_handle_mousedown = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        dragging.set(true);
    };
    let on_handle_touchstart = move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        dragging.set(true);
    };

    // Pointer-down on the slider or track (but not the handle) jumps
    // the handle to the pointer and begins a drag.
    let on_slider_mousedown = move |ev: web_sys::MouseEvent| {
        if hits_track(ev.target(), slider_ref, track_ref) {
            move_to(ev.client_x() as f64);
            dragging.set(true);
        }
    };
    let on_slider_touchstart = move |ev: web_sys::TouchEvent| {
        if hits_track(ev.target(), slider_ref, track_ref) {
            if let Some(touch) = ev.touches().get(0) {
                move_to(touch.client_x() as f64);
                dragging.set(true);
            }
        }
    };

    // Document-level listeners so a drag ends anywhere on the page.
    bind_document_listener::<web_sys::MouseEvent>("mousemove", move |ev| {
        if dragging.get_untracked() {
            move_to(ev.client_x() as f64);
        }
    });
    bind_document_listener::<web_sys::TouchEvent>("touchmove", move |ev| {
        if dragging.get_untracked() {
            if let Some(touch) = ev.touches().get(0) {
                move_to(touch.client_x() as f64);
            }
        }
    });
    bind_document_listener::<web_sys::MouseEvent>("mouseup", move |_ev| {
        dragging.set(false);
    });
    bind_document_listener::<web_sys::TouchEvent>("touchend", move |_ev| {
        dragging.set(false);
    });

    view! {
        <div
            class="timeline__slider"
            node_ref=slider_ref
            on:mousedown=on_slider_mousedown
            on:touchstart=on_slider_touchstart
        >
            <div class="timeline__track" node_ref=track_ref />
            <div
                class="timeline__slider-handle"
                style:left=move || format!("{}%", position.get())
                on:mousedown=on_handle_mousedown
                on:touchstart=on_handle_touchstart
            />
        </div>
    }
}

/// Whether an event target is the slider container or the bare track.
fn hits_track(
    target: Option<web_sys::EventTarget>,
    slider_ref: NodeRef<html::Div>,
    track_ref: NodeRef<html::Div>,
) -> bool {
    let target = match target.and_then(|target| target.dyn_into::<web_sys::Node>().ok()) {
        Some(node) => node,
        None => return false,
    };
    let on_slider = slider_ref
        .get_untracked()
        .map(|el| el.is_same_node(Some(&target)))
        .unwrap_or(false);
    let on_track = track_ref
        .get_untracked()
        .map(|el| el.is_same_node(Some(&target)))
        .unwrap_or(false);
    on_slider || on_track
}

/// Attach a page-lifetime listener to the document. The closure is
/// leaked deliberately; slider instances live as long as the page.
fn bind_document_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        let _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-9, "{} != {}", left, right);
    }

    #[test]
    fn clamps_out_of_range_positions() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(104.2), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
    }

    #[test]
    fn cross_fade_is_linear() {
        assert_eq!(layer_opacities(0.0), (1.0, 0.0));
        assert_eq!(layer_opacities(100.0), (0.0, 1.0));

        let (layer1, layer2) = layer_opacities(37.0);
        assert_close(layer1, 0.63);
        assert_close(layer2, 0.37);
        assert_close(layer1 + layer2, 1.0);
    }

    #[test]
    fn projects_pointer_onto_track() {
        assert_close(track_percent(150.0, 100.0, 200.0), 25.0);
        assert_close(track_percent(100.0, 100.0, 200.0), 0.0);
        assert_close(track_percent(300.0, 100.0, 200.0), 100.0);
        // Outside the track the raw projection escapes the range and
        // relies on clamping.
        assert!(track_percent(80.0, 100.0, 200.0) < 0.0);
        assert!(track_percent(340.0, 100.0, 200.0) > 100.0);
    }
}
