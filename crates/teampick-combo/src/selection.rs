//! The selection value: a tagged single/multi choice.

use crate::item::ComboItem;

/// The current choice(s) of a combo select, owned by the caller.
///
/// The variant doubles as the control's mode: passing `Single` gives
/// replace semantics, passing `Multi` gives ordered toggle semantics. A
/// mismatched mode/value pair is unrepresentable.
///
/// Multi selections are ordered, duplicate-free sets: order is first-toggle
/// order, and re-toggling an item removes it without reordering the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// At most one chosen item.
    Single(Option<T>),
    /// An ordered set of chosen items.
    Multi(Vec<T>),
}

impl<T: ComboItem> Selection<T> {
    /// An empty single-mode selection.
    #[must_use]
    pub fn single() -> Self {
        Self::Single(None)
    }

    /// An empty multi-mode selection.
    #[must_use]
    pub fn multi() -> Self {
        Self::Multi(Vec::new())
    }

    /// Number of chosen items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(v) => usize::from(v.is_some()),
            Self::Multi(v) => v.len(),
        }
    }

    /// Whether nothing is chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The chosen items, in selection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Single(v) => v.as_slice(),
            Self::Multi(v) => v,
        }
    }

    /// The chosen labels, in selection order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.items().iter().map(ComboItem::label).collect()
    }

    /// Whether an item with this label is chosen.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.items().iter().any(|it| it.label() == label)
    }

    /// The empty selection of the same mode.
    #[must_use]
    pub fn cleared(&self) -> Self {
        match self {
            Self::Single(_) => Self::Single(None),
            Self::Multi(_) => Self::Multi(Vec::new()),
        }
    }

    /// Toggle an item.
    ///
    /// Multi: removes the item if present (order of the rest preserved),
    /// appends it otherwise. Single: replaces the value, unless the item is
    /// already the value — then there is no change and `None` is returned.
    #[must_use]
    pub fn toggle(&self, item: &T) -> Option<Self> {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|c| c.label() == item.label()) {
                    None
                } else {
                    Some(Self::Single(Some(item.clone())))
                }
            }
            Self::Multi(chosen) => {
                let mut next = chosen.clone();
                if let Some(pos) = next.iter().position(|it| it.label() == item.label()) {
                    next.remove(pos);
                } else {
                    next.push(item.clone());
                }
                Some(Self::Multi(next))
            }
        }
    }

    /// Remove the item with this label, if chosen.
    ///
    /// Returns `None` when nothing changed.
    #[must_use]
    pub fn without(&self, label: &str) -> Option<Self> {
        if !self.contains(label) {
            return None;
        }
        match self {
            Self::Single(_) => Some(Self::Single(None)),
            Self::Multi(chosen) => {
                let next = chosen
                    .iter()
                    .filter(|it| it.label() != label)
                    .cloned()
                    .collect();
                Some(Self::Multi(next))
            }
        }
    }
}
