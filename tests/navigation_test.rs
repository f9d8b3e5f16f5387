//! Role filter and view router properties over the static menu

use concierge::modules::screens::select_view;
use concierge::nav::{filter_menu, Role, ViewId, MENU};

fn visible_ids(role: Role) -> Vec<ViewId> {
    filter_menu(&MENU, role).iter().map(|entry| entry.id).collect()
}

#[test]
fn test_filter_contains_exactly_permitted_entries() {
    for role in Role::ALL {
        let visible = visible_ids(role);
        for entry in MENU.iter() {
            assert_eq!(
                visible.contains(&entry.id),
                entry.roles.contains(&role),
                "{} for {}",
                entry.id,
                role
            );
        }
    }
}

#[test]
fn test_filter_preserves_declaration_order() {
    for role in Role::ALL {
        let positions: Vec<usize> = filter_menu(&MENU, role)
            .iter()
            .map(|entry| MENU.iter().position(|m| m.id == entry.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(positions, sorted, "order broken for {role}");
    }
}

#[test]
fn test_marketing_sees_guest_crm_and_channels() {
    assert_eq!(
        visible_ids(Role::Marketing),
        vec![ViewId::GuestProfile, ViewId::Channels]
    );
}

#[test]
fn test_front_desk_menu() {
    assert_eq!(
        visible_ids(Role::FrontDesk),
        vec![
            ViewId::Dashboard,
            ViewId::FrontDesk,
            ViewId::GuestProfile,
            ViewId::Events,
            ViewId::Billing,
        ]
    );
}

#[test]
fn test_router_falls_back_to_home() {
    let home = select_view("dashboard");
    assert_eq!(home.view, ViewId::Dashboard);
    assert_eq!(select_view("unknown-id"), home);
    assert_eq!(select_view("   "), home);
    assert_eq!(select_view("analytics").view, ViewId::Analytics);
}
