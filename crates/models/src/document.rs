/// A record persisted in a named collection with a store-assigned identifier.
///
/// The id is absent until the store first saves the record; it is never
/// produced in domain logic.
pub trait Document {
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}
