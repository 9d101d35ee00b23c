use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdClock, LdFileText, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{AppointmentStatus, DoctorAppointment, Priority, ScanReview};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardHeader, CardTitle,
};

use super::StatCard;
use crate::auth::use_display_name;

fn todays_appointments() -> Vec<DoctorAppointment> {
    vec![
        DoctorAppointment {
            patient: "John Doe".into(),
            time: "9:00 AM".into(),
            kind: "Follow-up".into(),
            status: AppointmentStatus::Confirmed,
        },
        DoctorAppointment {
            patient: "Sarah Miller".into(),
            time: "10:30 AM".into(),
            kind: "Consultation".into(),
            status: AppointmentStatus::InProgress,
        },
        DoctorAppointment {
            patient: "Mike Johnson".into(),
            time: "2:00 PM".into(),
            kind: "Check-up".into(),
            status: AppointmentStatus::Pending,
        },
    ]
}

fn pending_reviews() -> Vec<ScanReview> {
    vec![
        ScanReview {
            patient: "Emma Wilson".into(),
            scan_type: "X-Ray Chest".into(),
            priority: Priority::High,
            submitted: "2 hours ago".into(),
        },
        ScanReview {
            patient: "David Brown".into(),
            scan_type: "Blood Test".into(),
            priority: Priority::Medium,
            submitted: "4 hours ago".into(),
        },
        ScanReview {
            patient: "Lisa Garcia".into(),
            scan_type: "MRI Brain".into(),
            priority: Priority::High,
            submitted: "6 hours ago".into(),
        },
    ]
}

fn status_badge(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Confirmed => BadgeVariant::Success,
        AppointmentStatus::InProgress => BadgeVariant::Warning,
        AppointmentStatus::Pending => BadgeVariant::Outline,
    }
}

fn priority_badge(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Secondary,
    }
}

/// Doctor dashboard: today's schedule, scan reports awaiting review,
/// and shortcuts into the clinical tooling.
#[component]
pub fn DoctorDashboard() -> Element {
    let name = use_display_name();
    let appointments = todays_appointments();
    let scheduled = appointments.len();

    rsx! {
        div { class: "dashboard",
            section { class: "dashboard-hero",
                div {
                    h1 { "Good morning, Dr. {name}!" }
                    p {
                        "Ready to make a difference today. You have {scheduled} appointments scheduled."
                    }
                }
                div { class: "dashboard-hero-glyph",
                    Icon::<LdActivity> { icon: LdActivity, width: 44, height: 44 }
                }
            }

            div { class: "dashboard-tiles",
                StatCard {
                    label: "Today's Appointments",
                    value: "8",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Pending Reviews",
                    value: "12",
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Patients This Week",
                    value: "34",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Completed Today",
                    value: "5",
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        div {
                            CardTitle {
                                Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                "Today's Appointments"
                            }
                            CardDescription { "Your scheduled consultations for today" }
                        }
                        CardAction {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| tracing::debug!("view schedule"),
                                "View Schedule"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for appt in appointments {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        div { class: "record-item-lead",
                                            div { class: "record-item-avatar",
                                                Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                                            }
                                            div {
                                                h4 { class: "record-item-title", "{appt.patient}" }
                                                p { class: "record-item-caption", "{appt.kind}" }
                                            }
                                        }
                                        Badge { variant: status_badge(appt.status),
                                            "{appt.status.label()}"
                                        }
                                    }
                                    div { class: "record-item-row",
                                        span { class: "record-item-meta",
                                            Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                                            "{appt.time}"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| tracing::debug!("view appointment"),
                                            "View Details"
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
                                "Pending Reviews"
                            }
                            CardDescription { "Scan reports awaiting your review" }
                        }
                        CardAction {
                            Button {
                                onclick: move |_| tracing::debug!("review all"),
                                "Review All"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for review in pending_reviews() {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        div { class: "record-item-lead",
                                            div { class: "record-item-avatar",
                                                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                            }
                                            div {
                                                h4 { class: "record-item-title", "{review.patient}" }
                                                p { class: "record-item-caption", "{review.scan_type}" }
                                            }
                                        }
                                        Badge { variant: priority_badge(review.priority),
                                            "{review.priority.label()}"
                                        }
                                    }
                                    div { class: "record-item-row",
                                        span { class: "record-item-meta", "{review.submitted}" }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| tracing::debug!("review scan"),
                                            "Review Now"
                                        }
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
                        CardTitle { "Quick Actions" }
                        CardDescription { "Frequently used tools and features" }
                    }
                }
                CardContent {
                    div { class: "action-row",
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "action-row-button",
                            onclick: move |_| tracing::debug!("patient records"),
                            Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 }
                            span { "Patient Records" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "action-row-button",
                            onclick: move |_| tracing::debug!("medical reports"),
                            Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
                            span { "Medical Reports" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "action-row-button",
                            onclick: move |_| tracing::debug!("schedule management"),
                            Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                            span { "Schedule Management" }
                        }
                    }
                }
            }
        }
    }
}
