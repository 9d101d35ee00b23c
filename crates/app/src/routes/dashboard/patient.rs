use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdClock, LdFileText, LdHeart, LdPlus, LdScan,
};
use dioxus_free_icons::Icon;
use shared_types::{
    Appointment, AppointmentStatus, HealthMetric, ReviewStatus, ScanReport, Specialization,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardHeader, CardTitle,
};

use crate::auth::use_display_name;

// Static records pending the scheduling backend.
fn upcoming_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            doctor: "Dr. Sarah Johnson".into(),
            specialization: Specialization::Cardiology,
            date: "2024-01-25".into(),
            time: "10:30 AM".into(),
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            doctor: "Dr. Michael Chen".into(),
            specialization: Specialization::Dermatology,
            date: "2024-01-28".into(),
            time: "2:15 PM".into(),
            status: AppointmentStatus::Pending,
        },
    ]
}

fn recent_scans() -> Vec<ScanReport> {
    vec![
        ScanReport {
            kind: "X-Ray Chest".into(),
            date: "2024-01-20".into(),
            status: ReviewStatus::Reviewed,
            findings: "Normal".into(),
        },
        ScanReport {
            kind: "Blood Test".into(),
            date: "2024-01-18".into(),
            status: ReviewStatus::PendingReview,
            findings: "Pending".into(),
        },
    ]
}

fn health_metrics() -> Vec<HealthMetric> {
    vec![
        HealthMetric {
            label: "Blood Pressure".into(),
            value: "120/80".into(),
        },
        HealthMetric {
            label: "Heart Rate".into(),
            value: "72 bpm".into(),
        },
        HealthMetric {
            label: "Weight".into(),
            value: "70 kg".into(),
        },
        HealthMetric {
            label: "Temperature".into(),
            value: "98.6\u{00B0}F".into(),
        },
    ]
}

fn appointment_badge(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Confirmed => BadgeVariant::Success,
        AppointmentStatus::Pending => BadgeVariant::Secondary,
        AppointmentStatus::InProgress => BadgeVariant::Warning,
    }
}

fn scan_badge(status: ReviewStatus) -> BadgeVariant {
    match status {
        ReviewStatus::Reviewed => BadgeVariant::Success,
        ReviewStatus::PendingReview => BadgeVariant::Warning,
    }
}

/// Patient dashboard: upcoming appointments, recent scan reports, and
/// the latest vital-sign readings.
#[component]
pub fn PatientDashboard() -> Element {
    let name = use_display_name();

    rsx! {
        div { class: "dashboard",
            section { class: "dashboard-hero",
                div {
                    h1 { "Welcome back, {name}!" }
                    p { "Your health journey continues here. Stay informed, stay healthy." }
                }
                div { class: "dashboard-hero-glyph",
                    Icon::<LdHeart> { icon: LdHeart, width: 44, height: 44 }
                }
            }

            div { class: "dashboard-tiles",
                QuickAction {
                    title: "Book Appointment",
                    caption: "Schedule with specialists",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 24, height: 24 } },
                }
                QuickAction {
                    title: "Scan Report",
                    caption: "AI-powered analysis",
                    icon: rsx! { Icon::<LdScan> { icon: LdScan, width: 24, height: 24 } },
                }
                QuickAction {
                    title: "Medical Profile",
                    caption: "View & update records",
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
                }
                QuickAction {
                    title: "Health Metrics",
                    caption: "Track vital signs",
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        div {
                            CardTitle {
                                Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                "Upcoming Appointments"
                            }
                            CardDescription { "Your scheduled consultations" }
                        }
                        CardAction {
                            Button {
                                onclick: move |_| tracing::debug!("book appointment"),
                                Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                                "Book New"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for appt in upcoming_appointments() {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        h4 { class: "record-item-title", "{appt.doctor}" }
                                        Badge { variant: appointment_badge(appt.status),
                                            "{appt.status.label()}"
                                        }
                                    }
                                    p { class: "record-item-caption",
                                        {appt.specialization.display_name()}
                                    }
                                    div { class: "record-item-meta",
                                        span {
                                            Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                            "{appt.date}"
                                        }
                                        span {
                                            Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                                            "{appt.time}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        div {
                            CardTitle {
                                Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                "Recent Scans"
                            }
                            CardDescription { "Your latest medical reports" }
                        }
                        CardAction {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| tracing::debug!("view all scans"),
                                "View All"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for scan in recent_scans() {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        h4 { class: "record-item-title", "{scan.kind}" }
                                        Badge { variant: scan_badge(scan.status), "{scan.findings}" }
                                    }
                                    div { class: "record-item-meta",
                                        span { "{scan.date}" }
                                        span { class: "record-item-caption", "{scan.status.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    div {
                        CardTitle {
                            Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 }
                            "Health Metrics"
                        }
                        CardDescription { "Your latest vital signs and measurements" }
                    }
                }
                CardContent {
                    div { class: "metric-grid",
                        for metric in health_metrics() {
                            div { class: "metric-tile",
                                p { class: "metric-label", "{metric.label}" }
                                p { class: "metric-value", "{metric.value}" }
                                Badge { variant: BadgeVariant::Success, "Normal" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Tappable shortcut tile. Display only until the target pages exist.
#[component]
fn QuickAction(title: &'static str, caption: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "quick-action",
            div { class: "quick-action-icon", {icon} }
            h3 { class: "quick-action-title", "{title}" }
            p { class: "quick-action-caption", "{caption}" }
        }
    }
}
