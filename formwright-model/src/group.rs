use formwright_types::GroupId;
use serde::{Deserialize, Serialize};

/// A named bucket fields may point at through [`FieldDefinition::group`].
///
/// Groups own nothing: removing one leaves any field references to it in place.
///
/// [`FieldDefinition::group`]: crate::FieldDefinition::group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
}

impl Group {
    /// Creates a group with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: GroupId::generate(),
            title: title.into(),
        }
    }
}
