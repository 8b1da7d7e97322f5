//! Community feed page.

use leptos::prelude::*;

use crate::components::feed_post::FeedPostCard;
use crate::state::community::mock_feed;

/// The `/community` route: a fixed list of sample posts.
#[component]
pub fn CommunityPage() -> impl IntoView {
    let posts = mock_feed();

    view! {
        <div class="community-page">
            <h1 class="community-page__title">"Community Feed"</h1>
            <div class="community-page__feed">
                {posts
                    .into_iter()
                    .map(|post| view! { <FeedPostCard post=post/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
