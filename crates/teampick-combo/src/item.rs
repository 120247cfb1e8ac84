//! The option item trait.

/// An item that can be offered by a [`crate::ComboSelect`].
///
/// Labels identify items: filtering matches against them and selection
/// membership compares them, so they should be unique within one control's
/// option list.
pub trait ComboItem: Clone + Send + 'static {
    /// The display name of the item.
    fn label(&self) -> &str;
}

impl ComboItem for String {
    fn label(&self) -> &str {
        self
    }
}
