// services/rollcall-dash/src/components/nav.rs
//
// Roll Call Dashboard - View Navigation Links
//

use leptos::*;
use crate::state::DashState;
use crate::web;

#[component]
pub fn NavLinks(state: DashState, param: String) -> impl IntoView {
    let links = move || state.links.get();
    let param = store_value(param);

    view! {
        <nav id="nav-links" class="nav-links">
            <For
                each=links
                key=|link| link.key.as_str().to_string()
                children=move |link| {
                    let key = link.key.clone();
                    let href = link.href(&param.get_value());
                    let label = link.label.clone();
                    let is_active = move || state.current.get() == key;

                    view! {
                        <a
                            href=href
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                if let Err(e) = web::push_view(&link, &param.get_value()) {
                                    state.log("warn", &format!("Could not update the address bar: {}", e));
                                }
                                state.current.set(link.key.clone());
                            }
                        >
                            {label}
                        </a>
                    }
                }
            />
        </nav>
    }
}
