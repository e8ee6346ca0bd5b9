use dioxus::prelude::*;

use crate::data::LeaderboardEntry;

#[component]
pub fn LeaderboardScreen(rows: Vec<LeaderboardEntry>) -> Element {
    rsx! {
        table { class: "leaderboard",
            thead {
                tr {
                    th { "#" }
                    th { "Dog" }
                    th { "XP" }
                }
            }
            tbody {
                for (rank, row) in rows.iter().enumerate() {
                    tr { key: "{row.dog_id}",
                        td { "{rank + 1}" }
                        td { "{row.dog_name}" }
                        td { "{row.xp}" }
                    }
                }
            }
        }
    }
}
