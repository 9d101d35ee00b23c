use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdClock, LdMail, LdMessageCircle, LdPhone, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Inquiry, Priority, QueueEntry, QueueStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardHeader, CardTitle,
};

use super::StatCard;

fn appointment_queue() -> Vec<QueueEntry> {
    vec![
        QueueEntry {
            patient: "John Doe".into(),
            doctor: "Dr. Smith".into(),
            scheduled: "9:00 AM".into(),
            estimated: "9:15 AM".into(),
            status: QueueStatus::Waiting,
        },
        QueueEntry {
            patient: "Sarah Miller".into(),
            doctor: "Dr. Johnson".into(),
            scheduled: "9:30 AM".into(),
            estimated: "9:45 AM".into(),
            status: QueueStatus::InProgress,
        },
        QueueEntry {
            patient: "Mike Wilson".into(),
            doctor: "Dr. Chen".into(),
            scheduled: "10:00 AM".into(),
            estimated: "10:20 AM".into(),
            status: QueueStatus::Delayed,
        },
    ]
}

fn recent_inquiries() -> Vec<Inquiry> {
    vec![
        Inquiry {
            patient: "Emma Brown".into(),
            topic: "Appointment Change".into(),
            urgency: Priority::Medium,
            received: "10 min ago".into(),
        },
        Inquiry {
            patient: "David Garcia".into(),
            topic: "Insurance Query".into(),
            urgency: Priority::Low,
            received: "25 min ago".into(),
        },
        Inquiry {
            patient: "Lisa Johnson".into(),
            topic: "Emergency Request".into(),
            urgency: Priority::High,
            received: "1 hour ago".into(),
        },
    ]
}

fn queue_badge(status: QueueStatus) -> BadgeVariant {
    match status {
        QueueStatus::Waiting => BadgeVariant::Warning,
        QueueStatus::InProgress => BadgeVariant::Success,
        QueueStatus::Delayed => BadgeVariant::Destructive,
    }
}

fn urgency_badge(urgency: Priority) -> BadgeVariant {
    match urgency {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Outline,
    }
}

/// Front-desk dashboard: live appointment queue, patient inquiries, and
/// the day's totals. Shared by receptionists and admins.
#[component]
pub fn ReceptionistDashboard() -> Element {
    rsx! {
        div { class: "dashboard",
            section { class: "dashboard-hero",
                div {
                    h1 { "Reception Dashboard" }
                    p { "Managing appointments and patient inquiries efficiently." }
                }
                div { class: "dashboard-hero-glyph",
                    Icon::<LdUsers> { icon: LdUsers, width: 44, height: 44 }
                }
            }

            div { class: "dashboard-tiles",
                StatCard {
                    label: "Total Appointments",
                    value: "24",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 24, height: 24 } },
                }
                StatCard {
                    label: "New Registrations",
                    value: "6",
                    icon: rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Pending Inquiries",
                    value: "8",
                    icon: rsx! { Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Completed Today",
                    value: "18",
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
                }
            }

            div { class: "action-row",
                Button {
                    class: "action-row-button",
                    onclick: move |_| tracing::debug!("register patient"),
                    Icon::<LdUserPlus> { icon: LdUserPlus, width: 22, height: 22 }
                    span { "Register New Patient" }
                }
                Button {
                    class: "action-row-button",
                    onclick: move |_| tracing::debug!("schedule appointment"),
                    Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                    span { "Schedule Appointment" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "action-row-button",
                    onclick: move |_| tracing::debug!("patient support"),
                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 22, height: 22 }
                    span { "Patient Support" }
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        div {
                            CardTitle {
                                Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                                "Appointment Queue"
                            }
                            CardDescription { "Real-time appointment status" }
                        }
                        CardAction {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| tracing::debug!("manage queue"),
                                "Manage Queue"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for entry in appointment_queue() {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        div {
                                            h4 { class: "record-item-title", "{entry.patient}" }
                                            p { class: "record-item-caption", "with {entry.doctor}" }
                                        }
                                        Badge { variant: queue_badge(entry.status),
                                            "{entry.status.label()}"
                                        }
                                    }
                                    div { class: "record-item-row",
                                        div { class: "record-item-meta",
                                            span { "Scheduled: {entry.scheduled}" }
                                            span { "Est: {entry.estimated}" }
                                        }
                                        div { class: "record-item-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| tracing::debug!("call patient"),
                                                Icon::<LdPhone> { icon: LdPhone, width: 13, height: 13 }
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| tracing::debug!("email patient"),
                                                Icon::<LdMail> { icon: LdMail, width: 13, height: 13 }
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
                            CardTitle {
                                Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 18, height: 18 }
                                "Recent Inquiries"
                            }
                            CardDescription { "Patient support requests" }
                        }
                        CardAction {
                            Button {
                                onclick: move |_| tracing::debug!("view inquiries"),
                                "View All"
                            }
                        }
                    }
                    CardContent {
                        div { class: "record-list",
                            for inquiry in recent_inquiries() {
                                div { class: "record-item",
                                    div { class: "record-item-row",
                                        div { class: "record-item-lead",
                                            div { class: "record-item-avatar",
                                                Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 16, height: 16 }
                                            }
                                            div {
                                                h4 { class: "record-item-title", "{inquiry.patient}" }
                                                p { class: "record-item-caption", "{inquiry.topic}" }
                                            }
                                        }
                                        Badge { variant: urgency_badge(inquiry.urgency),
                                            "{inquiry.urgency.label()}"
                                        }
                                    }
                                    div { class: "record-item-row",
                                        span { class: "record-item-meta", "{inquiry.received}" }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| tracing::debug!("respond to inquiry"),
                                            "Respond"
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
                        CardTitle { "Daily Summary" }
                        CardDescription { "Overview of today's activities" }
                    }
                }
                CardContent {
                    div { class: "summary-grid",
                        div { class: "summary-tile",
                            h3 { "24" }
                            p { "Total Appointments" }
                            span { class: "summary-trend", "\u{2191} 12% from yesterday" }
                        }
                        div { class: "summary-tile",
                            h3 { "6" }
                            p { "New Patients" }
                            span { class: "summary-trend", "\u{2191} 20% from yesterday" }
                        }
                        div { class: "summary-tile",
                            h3 { "95%" }
                            p { "Patient Satisfaction" }
                            span { class: "summary-trend", "\u{2191} 3% from last week" }
                        }
                    }
                }
            }
        }
    }
}
