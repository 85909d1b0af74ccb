use super::*;

fn names(roster: &[StaffMember]) -> Vec<&str> {
    roster.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn instructors_come_first_in_source_order() {
    let roster = assemble_roster(
        vec![
            StaffMember::new("staff/instructor/element_0.png", "Zed"),
            StaffMember::new("staff/instructor/element_1.png", "Amy"),
        ],
        vec![StaffMember::new("staff/ta/element_0.png", "Bea")],
        RosterOrder::AsGiven,
    );
    assert_eq!(names(&roster), vec!["Zed", "Amy", "Bea"]);
}

#[test]
fn alphabetical_sorts_within_groups_only() {
    let roster = assemble_roster(
        vec![
            StaffMember::new("i0.png", "zed"),
            StaffMember::new("i1.png", "Amy"),
        ],
        vec![
            StaffMember::new("t0.png", "carl"),
            StaffMember::new("t1.png", "Bea"),
            StaffMember::new("t2.png", "bea"),
        ],
        RosterOrder::Alphabetical,
    );
    assert_eq!(names(&roster), vec!["Amy", "zed", "Bea", "bea", "carl"]);
    assert_eq!(roster[2].image, "t1.png");
}

#[test]
fn empty_groups_are_fine() {
    assert!(assemble_roster(vec![], vec![], RosterOrder::Alphabetical).is_empty());
}
