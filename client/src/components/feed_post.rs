//! A single post in the community feed.

use leptos::prelude::*;

use crate::state::community::FeedPost;

/// Author header, photo, engagement row, caption and spot details.
///
/// The like, comment, share and bookmark buttons are decorative.
#[component]
pub fn FeedPostCard(post: FeedPost) -> impl IntoView {
    let best_for = post.best_for_label();
    let has_best_for = !best_for.is_empty();
    let initial = post.author.chars().next().map(String::from).unwrap_or_default();

    view! {
        <article class="feed-post">
            <header class="feed-post__header">
                <span class="feed-post__avatar">{initial}</span>
                <div class="feed-post__author">
                    <span class="feed-post__name">{post.author.clone()}</span>
                    <span class="feed-post__place">{post.author_location}</span>
                </div>
            </header>

            <img class="feed-post__image" src=post.image_url alt=post.caption.clone()/>

            <div class="feed-post__actions">
                <button class="feed-post__action" title="Like">"♥ " {post.likes}</button>
                <button class="feed-post__action" title="Comment">"💬 " {post.comments}</button>
                <button class="feed-post__action" title="Share">"Share"</button>
                <button class="feed-post__action feed-post__action--end" title="Save">"Save"</button>
            </div>

            <div class="feed-post__body">
                <p class="feed-post__caption">
                    <strong>{post.author}</strong>
                    " "
                    {post.caption}
                </p>
                <div class="feed-post__details">
                    <span class="feed-post__spot">"📍 " {post.spot}</span>
                    <Show when=move || has_best_for>
                        <span class="feed-post__best-for">"Best for: " {best_for.clone()}</span>
                    </Show>
                </div>
            </div>
        </article>
    }
}
