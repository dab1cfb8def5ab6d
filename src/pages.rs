//! Page cloning and the DOM side of forward/back transitions.

use crate::constants::APP_CONTAINER_SELECTOR;
use crate::css;
use crate::dom;
use crate::motion;
use crate::state::Shared;
use glass_core::{PageTransition, TransitionOutcome};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn navigate(state: &Shared, target: &str) {
    let scroll = dom::scroll_y();
    let Some(t) = state.borrow_mut().pages.navigate(target, scroll) else {
        return;
    };
    if let Err(e) = mount_page(state, &t) {
        log::warn!("[nav] could not build {}: {e}", t.incoming.dom_id());
    }
    run(state, t);
}

pub fn go_back(state: &Shared) {
    let Some(t) = state.borrow_mut().pages.go_back() else {
        return;
    };
    run(state, t);
}

/// Clone the outgoing page as a placeholder for the incoming one and register
/// its surfaces and entrance items.
fn mount_page(state: &Shared, t: &PageTransition) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let source = state
        .borrow()
        .page_roots
        .get(&t.outgoing)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("outgoing page not mounted"))?;
    let page = source
        .clone_node_with_deep(true)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    page.set_id(&t.incoming.dom_id());
    let container = dom::query_one(&document, APP_CONTAINER_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {APP_CONTAINER_SELECTOR}"))?;
    container
        .append_child(&page)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (surfaces, items) = {
        let mut st = state.borrow_mut();
        // items entering with the page play once, from the replay in `finish`
        st.visibility.suspend_page(t.incoming);
        st.register_page(t.incoming, &page)
    };
    log::info!(
        "[nav] mounted {} ({surfaces} surfaces, {items} items) for {}",
        t.incoming.dom_id(),
        t.target.as_deref().unwrap_or("")
    );
    Ok(())
}

/// Place both pages at their start poses, transition them on the next frame
/// and land the transition when the timer fires.
fn run(state: &Shared, t: PageTransition) {
    let (incoming, outgoing) = {
        let st = state.borrow();
        (
            st.page_roots.get(&t.incoming).cloned(),
            st.page_roots.get(&t.outgoing).cloned(),
        )
    };
    if let Some(el) = &incoming {
        dom::set_style(
            el,
            &[
                ("display", ""),
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("transition", "none"),
                ("transform", css::page_transform(&t.incoming_from).as_str()),
                ("opacity", css::num(t.incoming_from.opacity).as_str()),
            ],
        );
    }
    if let Some(el) = &outgoing {
        dom::set_style(
            el,
            &[
                ("transition", "none"),
                ("transform", css::page_transform(&t.outgoing_from).as_str()),
                ("opacity", css::num(t.outgoing_from.opacity).as_str()),
            ],
        );
    }

    let state = state.clone();
    dom::next_frame(move || {
        let transition = css::page_transition(t.duration_ms, t.easing);
        for (el, pose) in [(&incoming, &t.incoming_to), (&outgoing, &t.outgoing_to)] {
            if let Some(el) = el {
                dom::set_style(
                    el,
                    &[
                        ("transition", transition.as_str()),
                        ("transform", css::page_transform(pose).as_str()),
                        ("opacity", css::num(pose.opacity).as_str()),
                    ],
                );
            }
        }
        dom::scroll_to(t.restore_scroll_y);
        dom::set_timeout(t.duration_ms, move || finish(&state));
    });
}

fn finish(state: &Shared) {
    let Some(outcome) = state.borrow_mut().pages.complete() else {
        return;
    };
    let TransitionOutcome {
        active,
        hidden,
        discard,
        replay,
        ..
    } = outcome;
    let (active_el, hidden_el) = {
        let st = state.borrow();
        (
            st.page_roots.get(&active).cloned(),
            st.page_roots.get(&hidden).cloned(),
        )
    };
    if let Some(el) = hidden_el {
        dom::set_style(&el, &[("display", "none"), ("transition", "")]);
    }
    if let Some(el) = active_el {
        dom::set_style(
            &el,
            &[
                ("position", "relative"),
                ("transform", "none"),
                ("transition", ""),
                ("opacity", "1"),
            ],
        );
    }
    if let Some(page) = discard {
        state.borrow_mut().discard_page(page);
    }
    if replay {
        let entrances: Vec<(web::HtmlElement, glass_core::Entrance)> = {
            let mut st = state.borrow_mut();
            let entrances = st.visibility.replay_page(active);
            entrances
                .into_iter()
                .filter_map(|e| st.registry.get(e.id).cloned().map(|el| (el, e)))
                .collect()
        };
        log::info!("[nav] replaying {} entrances on {}", entrances.len(), active.dom_id());
        for (el, e) in entrances {
            motion::apply_entrance(el, e);
        }
    }
}
