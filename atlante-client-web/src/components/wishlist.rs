use atlante_core::{WishlistItem, DEMO_USER_ID};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::edit_modal::EditModal;
use crate::components::SectionProps;

#[function_component(WishlistSection)]
pub fn wishlist_section(props: &SectionProps) -> Html {
    let items = use_state(Vec::<WishlistItem>::new);
    // voce in modifica nella modale, None = modale chiusa
    let editing = use_state(|| Option::<WishlistItem>::None);
    // contatore di ricarica: ogni mutazione lo incrementa e l'effect rilegge la lista
    let reload_tick = use_state(|| 0u32);

    {
        let items = items.clone();
        let on_status = props.on_status.clone();
        use_effect_with(*reload_tick, move |_| {
            spawn_local(async move {
                match api::fetch_wishlist(DEMO_USER_ID).await {
                    Ok(list) => items.set(list),
                    Err(_) => on_status.emit(Some("Impossibile caricare la wishlist".to_string())),
                }
            });
            || ()
        });
    }

    let on_edit = {
        let editing = editing.clone();
        move |item: WishlistItem| {
            let editing = editing.clone();
            Callback::from(move |_: MouseEvent| editing.set(Some(item.clone())))
        }
    };

    let on_delete = {
        let reload_tick = reload_tick.clone();
        let on_status = props.on_status.clone();
        move |country_code: String| {
            let reload_tick = reload_tick.clone();
            let on_status = on_status.clone();
            Callback::from(move |_: MouseEvent| {
                let reload_tick = reload_tick.clone();
                let on_status = on_status.clone();
                let country_code = country_code.clone();
                spawn_local(async move {
                    match api::delete_wishlist_item(DEMO_USER_ID, &country_code).await {
                        Ok(()) => reload_tick.set(*reload_tick + 1),
                        Err(_) => on_status.emit(Some("Errore del server durante la rimozione".to_string())),
                    }
                });
            })
        }
    };

    // esito della modale: None = annulla, Some((voto, note)) = salva con PUT
    let on_modal_close = {
        let editing = editing.clone();
        let reload_tick = reload_tick.clone();
        let on_status = props.on_status.clone();
        Callback::from(move |outcome: Option<(i64, String)>| {
            let item = (*editing).clone();
            editing.set(None);
            let (Some(item), Some((rating, notes))) = (item, outcome) else {
                return;
            };
            let reload_tick = reload_tick.clone();
            let on_status = on_status.clone();
            spawn_local(async move {
                match api::update_wishlist_item(&item.user_id, &item.country_code, rating, notes).await {
                    Ok(()) => reload_tick.set(*reload_tick + 1),
                    Err(_) => on_status.emit(Some("Errore del server durante il salvataggio".to_string())),
                }
            });
        })
    };

    html! {
        <section>
            <h2>{"La mia wishlist"}</h2>
            if items.is_empty() {
                <p class="muted">{"Nessun paese salvato: aggiungine uno dalla sezione Paesi."}</p>
            }
            <ul class="wishlist">
                { for items.iter().map(|item| html! {
                    <li key={item.item_id.clone()}>
                        <div>
                            <strong>{ &item.country_name }</strong>
                            <span class="muted">{ format!(" aggiunto il {}", item.added_at) }</span>
                        </div>
                        <div>{ format!("Voto: {}/5", item.rating) }</div>
                        if !item.notes.is_empty() {
                            <p class="notes">{ &item.notes }</p>
                        }
                        <div class="item-actions">
                            <button onclick={on_edit(item.clone())}>{"Modifica"}</button>
                            <button class="danger" onclick={on_delete(item.country_code.clone())}>{"Rimuovi"}</button>
                        </div>
                    </li>
                }) }
            </ul>
            <EditModal item={(*editing).clone()} on_close={on_modal_close} />
        </section>
    }
}
