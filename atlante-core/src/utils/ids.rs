use uuid::Uuid;

/// Genera un nuovo id di entità (utente o voce di wishlist) come UUIDv4 in stringa.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}
