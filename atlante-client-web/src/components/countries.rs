use atlante_core::{AddWishlistItemRequest, Country, DEMO_USER_ID};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::SectionProps;

const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Criterio di ordinamento lato client.
#[derive(Clone, Copy, PartialEq)]
enum SortKey {
    Name,
    Population,
}

#[function_component(CountriesSection)]
pub fn countries_section(props: &SectionProps) -> Html {
    let countries = use_state(Vec::<Country>::new);
    let query = use_state(String::new);
    let sort_key = use_state(|| SortKey::Name);

    // caricamento iniziale di tutti i paesi
    {
        let countries = countries.clone();
        let on_status = props.on_status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_countries().await {
                    Ok(list) => countries.set(list),
                    Err(_) => on_status.emit(Some("Sorgente paesi non raggiungibile".to_string())),
                }
            });
            || ()
        });
    }

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    // invio del form di ricerca: query vuota -> ricarica tutto
    let on_search = {
        let countries = countries.clone();
        let query = query.clone();
        let on_status = props.on_status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let q = (*query).trim().to_string();
            let countries = countries.clone();
            let on_status = on_status.clone();
            spawn_local(async move {
                let res = if q.is_empty() {
                    api::fetch_countries().await
                } else {
                    api::search_countries(&q).await
                };
                match res {
                    Ok(list) => {
                        on_status.emit(None);
                        countries.set(list);
                    }
                    Err(_) => on_status.emit(Some("Sorgente paesi non raggiungibile".to_string())),
                }
            });
        })
    };

    let on_region_change = {
        let countries = countries.clone();
        let on_status = props.on_status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let region = select.value();
            let countries = countries.clone();
            let on_status = on_status.clone();
            spawn_local(async move {
                let res = if region.is_empty() {
                    api::fetch_countries().await
                } else {
                    api::countries_by_region(&region).await
                };
                match res {
                    Ok(list) => {
                        on_status.emit(None);
                        countries.set(list);
                    }
                    Err(_) => on_status.emit(Some("Sorgente paesi non raggiungibile".to_string())),
                }
            });
        })
    };

    let on_sort_change = {
        let sort_key = sort_key.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort_key.set(match select.value().as_str() {
                "population" => SortKey::Population,
                _ => SortKey::Name,
            });
        })
    };

    // un callback per ogni card: aggiunge il paese alla wishlist dell'utente demo
    let add_to_wishlist = {
        let on_status = props.on_status.clone();
        move |country: &Country| {
            let req = AddWishlistItemRequest {
                country_code: country.cca2.clone(),
                country_name: country.name.common.clone(),
                rating: None,
                notes: None,
            };
            let on_status = on_status.clone();
            Callback::from(move |_: MouseEvent| {
                let req = req.clone();
                let on_status = on_status.clone();
                spawn_local(async move {
                    match api::add_wishlist_item(DEMO_USER_ID, &req).await {
                        Ok(()) => {
                            on_status.emit(Some(format!("{} aggiunto alla wishlist", req.country_name)))
                        }
                        // il doppio inserimento viene respinto dal server (vincolo di unicità)
                        Err(_) => on_status.emit(Some(format!("{} è già in wishlist", req.country_name))),
                    }
                });
            })
        }
    };

    // ordinamento con confronto nativo; per popolazione i più grandi prima
    let mut shown: Vec<Country> = (*countries).clone();
    match *sort_key {
        SortKey::Name => shown.sort_by(|a, b| a.name.common.cmp(&b.name.common)),
        SortKey::Population => shown.sort_by(|a, b| b.population.cmp(&a.population)),
    }

    html! {
        <section>
            <div class="toolbar">
                <form onsubmit={on_search}>
                    <input
                        type="search"
                        placeholder="Cerca un paese..."
                        value={(*query).clone()}
                        oninput={on_query_input}
                    />
                    <button type="submit">{"Cerca"}</button>
                </form>
                <label>
                    {"Regione "}
                    <select onchange={on_region_change}>
                        <option value="">{"Tutte"}</option>
                        { for REGIONS.iter().map(|r| html! { <option value={*r}>{*r}</option> }) }
                    </select>
                </label>
                <label>
                    {"Ordina per "}
                    <select onchange={on_sort_change}>
                        <option value="name">{"Nome"}</option>
                        <option value="population">{"Popolazione"}</option>
                    </select>
                </label>
            </div>
            <div class="cards">
                { for shown.iter().map(|c| html! {
                    <article class="card" key={c.cca2.clone()}>
                        <img src={c.flags.png.clone()} alt="" />
                        <h3>{ &c.name.common }</h3>
                        <p class="muted">
                            { c.capital.first().cloned().unwrap_or_default() }
                        </p>
                        <p>{ format!("{} · {} abitanti", c.region, c.population) }</p>
                        <button onclick={add_to_wishlist(c)}>{"Aggiungi alla wishlist"}</button>
                    </article>
                }) }
            </div>
        </section>
    }
}
