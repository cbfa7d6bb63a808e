//! App Root Component
//!
//! Navigation shell: nav bar plus the two client-side routes.

use leptos::*;
use leptos_router::*;
use outbreak::{Config, Route as Page};

use crate::components::Nav;
use crate::pages::{ChartsAndMaps, Contact};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // The page has no config file or environment; defaults only
    provide_context(Config::default());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <Nav />

                <main class="container mx-auto p-4">
                    <Routes>
                        <Route path=Page::Contact.path() view=Contact />
                        <Route path=Page::Dashboard.path() view=ChartsAndMaps />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Contact.path()
                class="bg-blue-500 text-white py-2 px-4 rounded-md"
            >
                "Go Home"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{Document, Event, EventInit, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn name_input() -> Option<HtmlInputElement> {
        document()
            .query_selector("input[name='name']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
    }

    fn click_nav_link(href: &str) {
        let link: HtmlElement = document()
            .query_selector(&format!("nav a[href='{}']", href))
            .unwrap()
            .expect("nav link rendered")
            .dyn_into()
            .unwrap();
        link.click();
    }

    /// Let the router and effects run
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    #[wasm_bindgen_test]
    async fn test_contact_form_is_empty_after_navigating_back() {
        web_sys::window()
            .unwrap()
            .history()
            .unwrap()
            .push_state_with_url(&JsValue::NULL, "", Some(Page::Contact.path()))
            .unwrap();
        mount_to_body(|| view! { <App /> });
        settle().await;

        let input = name_input().expect("contact form at /");
        input.set_value("Ada");
        let init = EventInit::new();
        init.set_bubbles(true);
        input
            .dispatch_event(&Event::new_with_event_init_dict("input", &init).unwrap())
            .unwrap();
        settle().await;
        assert_eq!(name_input().unwrap().value(), "Ada");

        click_nav_link(Page::Dashboard.path());
        settle().await;
        assert!(name_input().is_none());

        click_nav_link(Page::Contact.path());
        settle().await;
        assert_eq!(name_input().expect("contact form remounted").value(), "");
    }
}
