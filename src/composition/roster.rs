/// One person on the course staff.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StaffMember {
    /// Relative asset path of the staff photo.
    pub image: String,
    /// Display name.
    pub name: String,
}

impl StaffMember {
    pub fn new(image: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
        }
    }
}

/// Ordering applied inside each roster group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterOrder {
    /// Keep source order.
    #[default]
    AsGiven,
    /// Case-insensitive by name; ties keep source order.
    Alphabetical,
}

/// Instructors first, then assistants (TAs, UTAs, LAs), each group ordered by `order`.
pub fn assemble_roster(
    instructors: Vec<StaffMember>,
    assistants: Vec<StaffMember>,
    order: RosterOrder,
) -> Vec<StaffMember> {
    let mut groups = [instructors, assistants];
    if order == RosterOrder::Alphabetical {
        for group in &mut groups {
            group.sort_by_cached_key(|m| m.name.to_lowercase());
        }
    }
    let [mut roster, assistants] = groups;
    roster.extend(assistants);
    roster
}

#[cfg(test)]
#[path = "../../tests/unit/composition/roster.rs"]
mod tests;
