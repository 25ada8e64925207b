use leptos::prelude::*;

use crate::section::SectionId;

use super::{browser::scroll_to_section, PageState};

const NAV_BASE: &str = "fixed top-0 w-full z-50 transition-all duration-300";
const NAV_BUTTON_BASE: &str =
    "nav-item px-4 py-2 text-white transition-all duration-300 hover:scale-125 hover:shadow-lg rounded-lg";

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PageState>();
    let nav_class = move || {
        if state.scroll.with(|s| s.scrolled) {
            format!("{NAV_BASE} bg-black/95 backdrop-blur-xl border-b border-white/10")
        } else {
            format!("{NAV_BASE} bg-transparent")
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-center items-center">
                <div class="flex gap-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| view! { <NavButton id /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(id: SectionId) -> impl IntoView {
    let state = expect_context::<PageState>();
    let is_active = move || state.scroll.with(|s| s.active == Some(id));

    view! {
        <button
            type="button"
            data-section=id.as_str()
            class=move || {
                if is_active() {
                    format!("{NAV_BUTTON_BASE} nav-active bg-white/10")
                } else {
                    NAV_BUTTON_BASE.to_string()
                }
            }
            aria-current=move || is_active().then_some("true")
            on:click=move |_| scroll_to_section(id.as_str())
        >
            {id.label()}
        </button>
    }
}

/// The left and right rails: tinted once the page is scrolled, filled from
/// the top in proportion to scroll progress.
#[component]
pub fn ScrollRails() -> impl IntoView {
    let state = expect_context::<PageState>();
    let rail_style = move || {
        if state.scroll.with(|s| s.scrolled) {
            "background: #723ee7; opacity: 0.8; transition: all 0.3s ease"
        } else {
            "background: transparent; opacity: 0; transition: all 0.3s ease"
        }
    };
    let bar_style = move || {
        format!(
            "height: {:.2}%; background: #9333ea; box-shadow: 0 0 20px #723ee7",
            state.scroll.with(|s| s.progress)
        )
    };

    view! {
        <div
            class="fixed left-0 top-0 w-6 h-full z-50 pointer-events-none"
            data-rail="left"
            style=rail_style
        ></div>
        <div
            class="fixed right-0 top-0 w-6 h-full z-50 pointer-events-none"
            data-rail="right"
            style=rail_style
        ></div>
        <Show when=move || state.scroll.with(|s| s.progress > 0.0)>
            <div
                class="fixed left-0 top-0 w-6 z-50 pointer-events-none"
                data-progress="left"
                style=bar_style
            ></div>
            <div
                class="fixed right-0 top-0 w-6 z-50 pointer-events-none"
                data-progress="right"
                style=bar_style
            ></div>
        </Show>
    }
}
