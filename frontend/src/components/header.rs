use gloo_events::EventListener;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::pages::content::NAV_LINKS;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Compact header once the page has scrolled
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(is_scrolled(scroll_y));
                    }
                    EventListener::new(&window, "scroll", move |_| {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                scrolled.set(is_scrolled(scroll_y));
                            }
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <div class="container header-container">
                <a href="#" class="logo">
                    <img src="/assets/logo.png" alt="Vanlab Logo" />
                </a>
                <nav class="nav">
                    <ul class={classes!("nav-list", (*menu_open).then(|| "open"))}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                            </li>
                        }) }
                        <li>
                            <a href="#contact" class="nav-link btn-primary" onclick={close_menu}>
                                {"Let's Talk"}
                            </a>
                        </li>
                    </ul>
                </nav>
                <button class="mobile-menu-btn" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_compacts_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2400.0));
    }
}
