use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod content;
mod countup;
mod components {
    pub mod reveal;
    pub mod shapes;
    pub mod stat_counter;
    pub mod viewport;
}
mod pages {
    pub mod about;
}

use pages::about::About;

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">{"clearline"}</a>
                <div class="nav-right">
                    <a href="#story" class="nav-link">{"Story"}</a>
                    <a href="#team" class="nav-link">{"Team"}</a>
                    <a href="#stats" class="nav-link">{"Numbers"}</a>
                    <a
                        href={format!("mailto:{}", config::CONTACT_EMAIL)}
                        class="nav-cta"
                    >
                        {"Start a project"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.3rem;
                        font-weight: bold;
                        color: #fff;
                        text-decoration: none;
                        letter-spacing: 0.04em;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #999;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #7EB2FF;
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 6px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .nav-cta:hover {
                        transform: translateY(-1px);
                    }
                    @media (max-width: 768px) {
                        .nav-link {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <About />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Clearline Studio site");
    yew::Renderer::<App>::new().render();
}
