use yew::prelude::*;
use crate::content::Section;
use crate::utils::scroll::smooth_scroll_to;

fn nav_link(section: Section, menu_open: &UseStateHandle<bool>, class: &'static str) -> Html {
    let onclick = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            smooth_scroll_to(section);
            menu_open.set(false);
        })
    };
    let class = if section == Section::Contact {
        classes!(class, "nav-cta")
    } else {
        classes!(class)
    };
    html! {
        <button class={class} onclick={onclick}>{section.label()}</button>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="top-nav">
            <div class="top-nav-inner">
                <div class="brand">{"The Razor's Edge AI"}</div>
                <div class="nav-desktop">
                    { for Section::NAV.iter().map(|s| nav_link(*s, &menu_open, "nav-link")) }
                </div>
                <button class="nav-toggle" aria-label="Menu" onclick={toggle_menu}>
                    <i class={classes!("fas", if *menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { for Section::NAV.iter().map(|s| nav_link(*s, &menu_open, "nav-mobile-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(6, 182, 212, 0.2);
                }
                .top-nav-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #22d3ee, #facc15);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-desktop {
                    display: flex;
                    align-items: baseline;
                    gap: 2rem;
                }
                .nav-link, .nav-mobile-link {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .nav-mobile-link:hover {
                    color: #22d3ee;
                }
                .nav-link.nav-cta {
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                }
                .nav-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .nav-mobile {
                    display: none;
                    flex-direction: column;
                    padding: 0.5rem;
                    background: rgba(0, 0, 0, 0.95);
                }
                .nav-mobile-link {
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                }
                .nav-mobile-link.nav-cta {
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                    border-radius: 8px;
                }
                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }
                    .nav-toggle {
                        display: block;
                    }
                    .nav-mobile {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
