//! Chat channels, chat rooms and the club forum.

use dioxus::prelude::*;

use crate::data::{Channel, Message, Post};
use crate::nav::ChannelRef;
use crate::ui::components::NotFound;

/// Channel list shown on the Messages tab
#[component]
pub fn ChannelListScreen(
    channels: Vec<Channel>,
    club_names: Vec<String>,
    #[props(default = false)] with_forum: bool,
) -> Element {
    rsx! {
        ul { class: "channels",
            for (channel, club) in channels.iter().zip(club_names.iter()) {
                li { key: "{channel.club_id}-{channel.id}",
                    a { "data-command": "channel {channel.club_id} {channel.id} {channel.name}",
                        strong { "# {channel.name}" }
                        " · {club}"
                    }
                    if with_forum {
                        " "
                        a { "data-command": "forum {channel.club_id} {channel.id} {channel.name}", "forum" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ChatRoomScreen(channel: ChannelRef, messages: Vec<Message>) -> Element {
    rsx! {
        section { class: "chat-room", "data-channel": "{channel.id}",
            h2 { "# {channel.name}" }
            if messages.is_empty() {
                p { class: "text-muted", "No messages yet." }
            }
            ul { class: "messages",
                for (i, message) in messages.iter().enumerate() {
                    li { key: "{i}",
                        strong { "{message.author}" }
                        ": {message.body}"
                    }
                }
            }
            input { r#type: "text", placeholder: "Message #{channel.name}" }
        }
    }
}

#[component]
pub fn ForumScreen(club_id: u32, channel: ChannelRef, posts: Vec<Post>, detail_page: String) -> Element {
    rsx! {
        section { class: "forum",
            h2 { "Forum · {channel.name}" }
            ul {
                for post in posts.iter() {
                    li { key: "{post.id}",
                        a { "data-command": "open {detail_page} post={post.id}",
                            strong { "{post.title}" }
                            " by {post.author}"
                        }
                    }
                }
            }
            a { "data-command": "channel {club_id} {channel.id} {channel.name}", "Open chat" }
        }
    }
}

#[component]
pub fn PostScreen(post_id: u32, post: Option<Post>) -> Element {
    let Some(post) = post else {
        return rsx! { NotFound { what: "post".to_string(), id: Some(post_id) } };
    };

    rsx! {
        article { class: "post",
            h2 { "{post.title}" }
            p { small { class: "text-muted", "by {post.author}" } }
            p { "{post.body}" }
        }
    }
}
