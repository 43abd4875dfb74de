// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Consumer-side conversation filtering.
//!
//! Search is a presentation concern: it never touches the store, it only
//! narrows an already-loaded conversation list.

use scoutbase_core::types::Conversation;

/// Case-insensitive substring filter over counterpart name, venue name,
/// and last-message preview. A blank query matches everything.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    query: &str,
) -> Vec<&'a Conversation> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return conversations.iter().collect();
    }
    conversations
        .iter()
        .filter(|c| {
            c.counterpart_name.to_lowercase().contains(&needle)
                || c.venue_name.to_lowercase().contains(&needle)
                || c.last_message.to_lowercase().contains(&needle)
        })
        .collect()
}
