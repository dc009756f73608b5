use atlante_core::WishlistItem;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
    /// Voce in modifica; None tiene la modale chiusa.
    pub item: Option<WishlistItem>,
    /// None = annulla, Some((voto, note)) = salva.
    pub on_close: Callback<Option<(i64, String)>>,
}

#[function_component(EditModal)]
pub fn edit_modal(props: &EditModalProps) -> Html {
    let (should_show, title, item_rating, item_notes) = match &props.item {
        Some(item) => (true, item.country_name.clone(), item.rating, item.notes.clone()),
        None => (false, String::new(), 0, String::new()),
    };

    let rating = use_state(|| 0i64);
    let notes = use_state(String::new);
    let is_shown = use_state(|| false);
    // all'apertura i campi ripartono dai valori salvati della voce
    if should_show != *is_shown {
        is_shown.set(should_show);
        rating.set(item_rating);
        notes.set(item_notes);
    }
    if !*is_shown {
        return html! {
            <div class="modal" />
        };
    }

    let on_rating_input = {
        let rating = rating.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rating.set(input.value().parse().unwrap_or(0));
        })
    };
    let on_notes_input = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(area.value());
        })
    };

    let discard = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(None))
    };
    let save = {
        let on_close = props.on_close.clone();
        let rating = rating.clone();
        let notes = notes.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(Some((*rating, (*notes).clone()))))
    };

    html! {
        <div class="modal is-active">
            <div class="modal-background" onclick={discard.clone()} />
            <div class="modal-content">
                <h3>{ title }</h3>
                <label>
                    {"Voto (0-5)"}
                    <input
                        type="number" min="0" max="5"
                        value={rating.to_string()}
                        oninput={on_rating_input}
                    />
                </label>
                <label>
                    {"Note"}
                    <textarea value={(*notes).clone()} oninput={on_notes_input} />
                </label>
                <div class="modal-actions">
                    <button onclick={save}>{"Salva"}</button>
                    <button onclick={discard}>{"Annulla"}</button>
                </div>
            </div>
        </div>
    }
}
