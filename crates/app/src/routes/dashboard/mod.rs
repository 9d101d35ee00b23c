pub mod doctor;
pub mod patient;
pub mod receptionist;

use dioxus::prelude::*;
use shared_types::{dashboard_for, DashboardView};

use crate::auth::use_role;

/// Role-adaptive dashboard: renders the view `dashboard_for` picks for
/// the session role. Total, so an unauthenticated session gets the auth
/// flow, never a dashboard.
#[component]
pub fn Dashboard() -> Element {
    let role = use_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match dashboard_for(role) {
            DashboardView::AuthFlow => rsx! { crate::routes::auth::AuthPage {} },
            DashboardView::Patient => rsx! { patient::PatientDashboard {} },
            DashboardView::Doctor => rsx! { doctor::DoctorDashboard {} },
            DashboardView::Receptionist => rsx! { receptionist::ReceptionistDashboard {} },
        }
    }
}

/// Stat tile used by the staff dashboards.
#[component]
pub fn StatCard(label: &'static str, value: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "stat-card",
            div {
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
            }
            div { class: "stat-card-icon", {icon} }
        }
    }
}
