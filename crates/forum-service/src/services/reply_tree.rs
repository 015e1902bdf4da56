//! Reply tree builder
//!
//! Turns a post's flat reply list into a forest of nested nodes. Parents are
//! always visited before their children because nodes are processed in
//! `(depth, created_at, id)` order.

use std::collections::HashMap;

use forum_core::{AuthorSummary, OrphanPolicy, Reply, Snowflake};

use crate::dto::ReplyResponse;

/// Build the reply forest for one post.
///
/// A reply whose parent is absent from `replies` (deleted, or cut off by the
/// depth limit) is an orphan: `Promote` makes it a root, `Drop` omits it
/// together with everything beneath it. Authors missing from `authors` are
/// rendered as unknown users.
pub fn build_reply_tree(
    mut replies: Vec<Reply>,
    authors: &HashMap<Snowflake, AuthorSummary>,
    policy: OrphanPolicy,
) -> Vec<ReplyResponse> {
    replies.sort_by(|a, b| {
        a.depth
            .cmp(&b.depth)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });

    let index: HashMap<Snowflake, usize> =
        replies.iter().enumerate().map(|(i, r)| (r.id, i)).collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); replies.len()];
    let mut roots = Vec::new();

    for (i, reply) in replies.iter().enumerate() {
        let Some(parent_id) = reply.parent_reply_id else {
            roots.push(i);
            continue;
        };

        // A parent sorted after its child means inconsistent depths; treat as orphan
        match index.get(&parent_id) {
            Some(&p) if p < i => children[p].push(i),
            _ => match policy {
                OrphanPolicy::Promote => roots.push(i),
                OrphanPolicy::Drop => {}
            },
        }
    }

    let mut slots: Vec<Option<Reply>> = replies.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|i| assemble(i, &mut slots, &children, authors))
        .collect()
}

fn assemble(
    i: usize,
    slots: &mut [Option<Reply>],
    children: &[Vec<usize>],
    authors: &HashMap<Snowflake, AuthorSummary>,
) -> Option<ReplyResponse> {
    let reply = slots[i].take()?;
    let author = authors
        .get(&reply.author_id)
        .cloned()
        .unwrap_or_else(|| AuthorSummary::unknown(reply.author_id));

    let mut node = ReplyResponse::leaf(reply, author);
    node.replies = children[i]
        .iter()
        .filter_map(|&c| assemble(c, slots, children, authors))
        .collect();
    Some(node)
}
