//! Traits shared by the three CRUD resources, plus the canonical list
//! rendering decision.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A CRUD-managed entity type. Identity (`_id`) is owned by the backing
/// store and never generated client-side.
pub trait Resource: Clone + Debug + DeserializeOwned + Send + 'static {
    /// The editable write shape for this resource.
    type Draft: Draft;

    /// Collection path on the API, e.g. `/plans`.
    const COLLECTION_PATH: &'static str;

    /// Human-readable noun used in notification titles.
    const NOUN: &'static str;

    fn id(&self) -> &str;

    /// Projects the record into its write shape, used to seed update forms.
    fn draft(&self) -> Self::Draft;
}

/// The editable, in-progress copy of a resource used inside a create or
/// update form. Exists only while its modal is open.
pub trait Draft: Clone + Debug + Default + PartialEq + Serialize + Send + 'static {
    /// Required-field check, run only at submit time.
    fn is_complete(&self) -> bool;

    /// Applies the form's upper-bound field caps after each edit.
    fn clamp(&mut self);
}

/// `{label, value}` pair consumed by a selection field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub label: String,
    pub value: String,
}

/// The three-way rendering contract every list in the system follows.
#[derive(Debug, PartialEq, Eq)]
pub enum ListRender<'a, T> {
    Loading,
    Items(&'a [T]),
    Empty,
}

/// Pure decision function: loading wins, then items, then the empty state.
pub fn render_list<T>(loading: bool, items: &[T]) -> ListRender<'_, T> {
    if loading {
        ListRender::Loading
    } else if items.is_empty() {
        ListRender::Empty
    } else {
        ListRender::Items(items)
    }
}

pub(crate) fn truncate_chars(value: &mut String, max: usize) {
    if let Some((idx, _)) = value.char_indices().nth(max) {
        value.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_prefers_loading_over_items() {
        let items = vec![1, 2];
        assert_eq!(render_list(true, &items), ListRender::Loading);
    }

    #[test]
    fn render_list_shows_items_when_present() {
        let items = vec![1, 2];
        assert_eq!(render_list(false, &items), ListRender::Items(&items[..]));
    }

    #[test]
    fn render_list_falls_back_to_empty_state() {
        let items: Vec<i32> = Vec::new();
        assert_eq!(render_list(false, &items), ListRender::Empty);
    }

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        let mut value = "ñandú city".to_string();
        truncate_chars(&mut value, 5);
        assert_eq!(value, "ñandú");

        let mut short = "abc".to_string();
        truncate_chars(&mut short, 5);
        assert_eq!(short, "abc");
    }
}
