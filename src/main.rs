use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod reveal;
mod view_state;
mod components {
    pub mod reveal_block;
    pub mod whatsapp_fab;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use view_state::{ViewAction, ViewState};

// Single-page site: every destination is an in-page anchor, so the router
// only knows the root and sends everything else back to it.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("01", "Problemas", "#problemas"),
    ("02", "Quem Somos", "#quem-somos"),
    ("03", "Avaliações", "#avaliacoes"),
    ("04", "Contato", "#contato"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let view = use_reducer(ViewState::default);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    view.dispatch(ViewAction::Scrolled(scroll_top as f64));
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

    let toggle_menu = {
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            view.dispatch(ViewAction::ToggleNavigation);
        })
    };

    // Selecting a destination always closes the overlay; the default anchor
    // jump is left alone.
    let close_menu = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            view.dispatch(ViewAction::CloseNavigation);
        })
    };

    html! {
        <header class={classes!("top-nav", view.past_threshold().then_some("scrolled"))}>
            <a href="/" class="nav-logo">{"C&R"}</a>

            <button
                class={classes!("burger", view.nav_open().then_some("open"))}
                onclick={toggle_menu}
                aria-label="Abrir navegação"
            >
                <span></span>
                <span></span>
            </button>

            <nav class={classes!("nav-overlay", view.nav_open().then_some("open"))}>
                <p class="nav-overlay-label">{"Navegação"}</p>
                <div class="nav-overlay-links">
                    {
                        NAV_LINKS.iter().map(|&(num, label, target)| html! {
                            <a key={num} href={target} onclick={close_menu.clone()}>
                                <span class="nav-link-num">{num}</span>
                                {label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </nav>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 2rem 5.13vw;
                    transition: background 0.3s ease, padding 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(245, 244, 240, 0.75);
                    backdrop-filter: blur(16px);
                    padding: 1rem 5.13vw;
                }

                .nav-logo {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #141414;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .nav-logo:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .burger {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    cursor: pointer;
                    z-index: 102;
                }

                .burger span {
                    width: 2rem;
                    height: 1px;
                    background: #141414;
                    transition: transform 0.3s ease;
                }

                .burger.open span:first-child {
                    transform: rotate(45deg) translateY(4.5px);
                }

                .burger.open span:last-child {
                    transform: rotate(-45deg) translateY(-4.5px);
                }

                .nav-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 101;
                    background: #f5f4f0;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 0 5.13vw;
                    transform: translateX(100%);
                    opacity: 0;
                    transition:
                        transform 0.45s cubic-bezier(0.22, 1, 0.36, 1),
                        opacity 0.45s ease;
                }

                .nav-overlay.open {
                    transform: none;
                    opacity: 1;
                }

                .nav-overlay-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    opacity: 0.3;
                    margin-bottom: 2rem;
                }

                .nav-overlay-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .nav-overlay-links a {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 300;
                    letter-spacing: -0.04em;
                    color: #141414;
                    text-decoration: none;
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    transition: color 0.3s ease;
                }

                .nav-overlay-links a:hover {
                    color: #2441e7;
                }

                .nav-link-num {
                    font-family: monospace;
                    font-size: 0.75rem;
                    opacity: 0.3;
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
