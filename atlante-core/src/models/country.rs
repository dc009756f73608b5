use serde::{Deserialize, Serialize};

/// Paese come arriva dalla sorgente esterna. Non viene mai persistito:
/// il server lo inoltra così com'è e solo il client lo deserializza.
/// Tutti i campi hanno un default perché il payload upstream può essere parziale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub name: CountryName,
    /// Codice ISO a due lettere, usato come chiave della wishlist.
    pub cca2: String,
    pub region: String,
    pub capital: Vec<String>,
    pub population: u64,
    pub flags: CountryFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryFlags {
    pub png: String,
    pub svg: String,
}
