//! Dog profile, progression, tasks and badges.

use dioxus::prelude::*;

use crate::data::Dog;
use crate::ui::components::NotFound;

/// Which part of the dog's record a page shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DogView {
    Overview,
    Progression,
    Tasks,
    Badges,
}

#[component]
pub fn DogScreen(dog_id: u32, dog: Option<Dog>, view: DogView) -> Element {
    let Some(dog) = dog else {
        return rsx! { NotFound { what: "dog".to_string(), id: Some(dog_id) } };
    };
    let done = dog.tasks_done();
    let total = dog.tasks.len();

    rsx! {
        article { class: "dog",
            h2 { "{dog.name}" }
            p { small { class: "text-muted", "{dog.breed}" } }
            {match view {
                DogView::Overview | DogView::Progression => rsx! {
                    p { "Level {dog.level} · {dog.xp} xp" }
                    progress { max: "{total}", value: "{done}" }
                    p { "{done}/{total} tasks done" }
                },
                DogView::Tasks => rsx! {
                    ul { class: "tasks",
                        for task in dog.tasks.iter() {
                            li { key: "{task.title}",
                                if task.done { "✔ " } else { "○ " }
                                "{task.title}"
                            }
                        }
                    }
                },
                DogView::Badges => rsx! {
                    if dog.badges.is_empty() {
                        p { "No badges yet." }
                    }
                    ul { class: "badges",
                        for badge in dog.badges.iter() {
                            li { key: "{badge}", "🏅 {badge}" }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn DogListScreen(dogs: Vec<Dog>, detail_page: String) -> Element {
    rsx! {
        ul { class: "dogs",
            for dog in dogs.iter() {
                li { key: "{dog.id}",
                    a { "data-command": "open {detail_page} dog={dog.id}",
                        strong { "{dog.name}" }
                        " · {dog.breed} · level {dog.level}"
                    }
                }
            }
        }
    }
}
