use pretty_assertions::assert_eq;
use shared_types::{menu_for, NavIcon, Role};

#[test]
fn unauthenticated_sessions_get_no_menu() {
    assert!(menu_for(None).is_empty());
}

#[test]
fn patient_menu_is_fixed_and_ordered() {
    let labels: Vec<&str> = menu_for(Some(Role::Patient))
        .iter()
        .map(|item| item.label)
        .collect();

    assert_eq!(
        labels,
        vec![
            "Dashboard",
            "Medical Profile",
            "Scan Reports",
            "Appointments",
            "Chat",
        ]
    );
}

#[test]
fn doctor_menu_is_fixed_and_ordered() {
    let labels: Vec<&str> = menu_for(Some(Role::Doctor))
        .iter()
        .map(|item| item.label)
        .collect();

    assert_eq!(
        labels,
        vec!["Dashboard", "Appointments", "Scan Reviews", "Patients"]
    );
}

#[test]
fn front_desk_menu_is_shared_by_receptionist_and_admin() {
    let receptionist = menu_for(Some(Role::Receptionist));
    let labels: Vec<&str> = receptionist.iter().map(|item| item.label).collect();

    assert_eq!(
        labels,
        vec![
            "Dashboard",
            "Appointment Queue",
            "User Management",
            "Chat Support",
        ]
    );
    assert_eq!(menu_for(Some(Role::Admin)), receptionist);
}

#[test]
fn menus_are_stable_across_calls() {
    assert_eq!(menu_for(Some(Role::Patient)), menu_for(Some(Role::Patient)));
}

#[test]
fn dashboard_entries_use_the_activity_icon() {
    for role in [Role::Patient, Role::Doctor, Role::Receptionist] {
        assert_eq!(menu_for(Some(role))[0].icon, NavIcon::Activity);
    }
}
