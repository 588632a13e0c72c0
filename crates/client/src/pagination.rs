//! Generic cursor-following pagination.

use std::future::Future;

use wsexport_core::errors::Result;

use crate::models::Connection;

/// One page of results from a cursor-based source.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl<T> From<Connection<T>> for Page<T> {
    fn from(connection: Connection<T>) -> Self {
        let has_next_page = connection.page_info.has_next_page;
        let end_cursor = connection.page_info.end_cursor.clone();
        Page {
            items: connection.into_nodes(),
            has_next_page,
            end_cursor,
        }
    }
}

/// Follows cursors until the source reports no further page, concatenating
/// the items of every page in order.
///
/// The starting cursor is absent; each subsequent request carries the
/// previous page's end cursor. Page count is never assumed in advance. The
/// first failed page request aborts the whole accumulation and partial
/// results are discarded; there is no retry.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.take()).await?;
        items.extend(page.items);
        if !page.has_next_page {
            break;
        }
        cursor = page.end_cursor;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use wsexport_core::errors::{Error, FetchError};

    fn page(items: &[&str], has_next_page: bool, end_cursor: Option<&str>) -> Page<String> {
        Page {
            items: items.iter().map(|s| s.to_string()).collect(),
            has_next_page,
            end_cursor: end_cursor.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_terminates_after_last_page() {
        let pages = RefCell::new(VecDeque::from(vec![
            page(&["a1", "a2"], true, Some("c1")),
            page(&["b1"], true, Some("c2")),
            page(&["c1"], false, None),
        ]));
        let cursors = RefCell::new(Vec::new());

        let items = fetch_all_pages(|cursor| {
            cursors.borrow_mut().push(cursor);
            let next = pages.borrow_mut().pop_front().expect("no page left");
            async move { Ok(next) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a1", "a2", "b1", "c1"]);
        assert_eq!(
            *cursors.borrow(),
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
        assert!(pages.borrow().is_empty(), "exactly one call per page");
    }

    #[tokio::test]
    async fn test_single_page() {
        let items = fetch_all_pages(|_| async { Ok(page(&["only"], false, None)) })
            .await
            .unwrap();
        assert_eq!(items, vec!["only"]);
    }

    #[tokio::test]
    async fn test_failed_page_discards_partial_results() {
        let pages = RefCell::new(VecDeque::from(vec![page(&["a1"], true, Some("c1"))]));

        let result: Result<Vec<String>> = fetch_all_pages(|_| {
            let next = pages.borrow_mut().pop_front();
            async move {
                match next {
                    Some(page) => Ok(page),
                    None => Err(Error::Fetch(FetchError::Status {
                        status: 502,
                        body: "bad gateway".to_string(),
                    })),
                }
            }
        })
        .await;

        assert!(matches!(
            result,
            Err(Error::Fetch(FetchError::Status { status: 502, .. }))
        ));
    }
}
