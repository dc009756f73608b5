pub mod countries;
pub mod edit_modal;
pub mod wishlist;

use yew::prelude::*;

/// Props comuni alle sezioni: il canale verso il banner di stato dell'app.
/// None lo nasconde, Some(testo) lo mostra.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub on_status: Callback<Option<String>>,
}
