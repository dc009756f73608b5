use yew::prelude::*;

mod api;
mod components;

use components::countries::CountriesSection;
use components::wishlist::WishlistSection;

/// Sezione attiva della pagina.
#[derive(Clone, Copy, PartialEq)]
enum Section {
    Countries,
    Wishlist,
}

#[function_component(App)]
fn app() -> Html {
    let section = use_state(|| Section::Countries);
    // Messaggio del banner di stato, condiviso tra le sezioni.
    let status = use_state(|| Option::<String>::None);

    let on_status = {
        let status = status.clone();
        Callback::from(move |msg: Option<String>| status.set(msg))
    };

    let goto = {
        let section = section.clone();
        let status = status.clone();
        move |target: Section| {
            let section = section.clone();
            let status = status.clone();
            Callback::from(move |_: MouseEvent| {
                // cambiando sezione il banner della precedente non ha più senso
                status.set(None);
                section.set(target);
            })
        }
    };

    let tab_class = |tab: Section| {
        classes!("tab", (*section == tab).then_some("active"))
    };

    html! {
        <main class="app">
            <header>
                <h1>{"Atlante"}</h1>
                <nav>
                    <button class={tab_class(Section::Countries)} onclick={goto(Section::Countries)}>
                        {"Paesi"}
                    </button>
                    <button class={tab_class(Section::Wishlist)} onclick={goto(Section::Wishlist)}>
                        {"La mia wishlist"}
                    </button>
                </nav>
            </header>
            if let Some(msg) = (*status).clone() {
                <div class="banner">{msg}</div>
            }
            {
                match *section {
                    Section::Countries => html! { <CountriesSection on_status={on_status.clone()} /> },
                    Section::Wishlist => html! { <WishlistSection on_status={on_status.clone()} /> },
                }
            }
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
