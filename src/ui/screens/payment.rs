//! Club teacher seat pricing and payment.

use dioxus::prelude::*;

use crate::nav::TeachersPricing;

/// Seat packs offered on the pricing page: (seats, monthly price per seat)
pub const SEAT_PACKS: &[(u32, u32)] = &[(1, 19), (3, 15), (10, 12)];

#[component]
pub fn PricingScreen() -> Element {
    rsx! {
        section { class: "pricing",
            p { "Add teachers to your club." }
            ul {
                for (seats, price) in SEAT_PACKS.iter() {
                    li { key: "{seats}",
                        a { "data-command": "open clubTeachersPayment seats={seats} price={price}",
                            strong { "{seats} seat(s)" }
                            " · {price} € / seat / month"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PaymentScreen(pricing: TeachersPricing) -> Element {
    let total = pricing.total();

    rsx! {
        section { class: "payment",
            dl {
                dt { "Seats" }
                dd { "{pricing.count}" }
                dt { "Price per seat" }
                dd { "{pricing.price} €" }
                dt { "Total" }
                dd { strong { "{total} €" } }
            }
            a { class: "btn", "data-command": "pay-complete", "Pay {total} €" }
        }
    }
}
