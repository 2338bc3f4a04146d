// src/api/pagination.rs
//! Cursor pagination as a lazy stream.
//!
//! [`iterate_paginated`] turns any cursor-paginated list call into a
//! forward-only `Stream` of items. The engine is strictly pull-based: a
//! request goes out only when the consumer polls past the items already
//! buffered from the current page, so an abandoned stream issues no
//! further calls. Errors from the list call are not caught or wrapped —
//! the engine has no basis for deciding whether a mid-pagination failure
//! is retryable, so it surfaces the transport's error verbatim and stops
//! at the current cursor.

use super::types::{PageBatch, PaginatedRequest};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;

/// Where the engine stands between requests.
enum CursorState {
    /// Nothing requested yet; the first call passes the caller's
    /// arguments through unchanged, whatever cursor they carry.
    Start,
    /// The previous page returned this cursor.
    Next(String),
    /// The previous page was terminal.
    Done,
}

/// Lazily iterates every item behind a cursor-paginated list call.
///
/// Each request clones `first_args`, overriding only the start cursor
/// with the one returned by the previous page. Iteration ends when a page
/// returns no cursor (or an empty one); `has_more` is ignored. At least
/// one call is always made.
pub fn iterate_paginated<A, P, T, E, F, Fut>(
    list_call: F,
    first_args: A,
) -> impl Stream<Item = Result<T, E>>
where
    A: PaginatedRequest,
    P: PageBatch<T>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<P, E>>,
{
    let pages = stream::try_unfold(
        (list_call, first_args, CursorState::Start),
        |(mut call, args, state)| async move {
            let request = match state {
                CursorState::Start => args.clone(),
                CursorState::Next(cursor) => args.clone().with_start_cursor(Some(cursor)),
                CursorState::Done => return Ok(None),
            };
            let page = call(request).await?;
            let next_state = match page.next_cursor().filter(|c| !c.is_empty()) {
                Some(cursor) => CursorState::Next(cursor.to_string()),
                None => CursorState::Done,
            };
            let items = page.into_items();
            log::debug!("fetched page of {} items", items.len());
            Ok(Some((items, (call, args, next_state))))
        },
    );

    pages
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, E>)))
        .try_flatten()
}

/// Eagerly collects every item behind a cursor-paginated list call, by
/// draining the lazy stream.
pub async fn collect_paginated<A, P, T, E, F, Fut>(list_call: F, first_args: A) -> Result<Vec<T>, E>
where
    A: PaginatedRequest,
    P: PageBatch<T>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<P, E>>,
{
    let items = iterate_paginated(list_call, first_args);
    futures::pin_mut!(items);
    items.try_collect().await
}
