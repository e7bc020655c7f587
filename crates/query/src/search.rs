use admin_models::{Organization, Team, User};

/// Per-type searchable fields for the console search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Organization {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.owner.name, &self.owner.email]
    }
}

impl Searchable for Team {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

impl<T: Searchable> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (*self).search_fields()
    }
}

/// Whether `item` matches `term`: case-insensitive substring over the
/// searchable fields. The empty term matches everything.
pub fn matches<E: Searchable>(item: &E, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filtered view over a snapshot. Never mutates the input; filtering an
/// already-filtered set by the same term yields the same set.
pub fn filter<'a, E: Searchable>(items: &'a [E], term: &str) -> Vec<&'a E> {
    items.iter().filter(|item| matches(item, term)).collect()
}
