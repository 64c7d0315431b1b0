// src/crawl/visited.rs
// =============================================================================
// The set of URLs already emitted in this crawl run.
//
// It only ever grows, and the only way in is mark(), which inserts and
// reports whether the URL was new in one step. There is no separate
// contains-then-insert, so a concurrent crawler built on this type can't
// visit a page twice.
// =============================================================================

use std::collections::HashSet;
use std::sync::Mutex;

use url::Url;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<Url>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true if the URL had not been visited before this call
    pub fn mark(&self, url: &Url) -> bool {
        // A poisoned lock still holds a valid set; keep using it
        let mut urls = self.urls.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        urls.insert(url.clone())
    }

    pub fn len(&self) -> usize {
        self.urls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_mark_reports_new_once() {
        let visited = VisitedSet::new();
        let url = Url::parse("http://example.com/").unwrap();

        assert!(visited.mark(&url));
        assert!(!visited.mark(&url));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_no_implicit_normalisation() {
        let visited = VisitedSet::new();
        assert!(visited.mark(&Url::parse("http://example.com/a").unwrap()));
        assert!(visited.mark(&Url::parse("http://example.com/a/").unwrap()));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_concurrent_marks_admit_one_winner() {
        let visited = Arc::new(VisitedSet::new());
        let url = Url::parse("http://example.com/contended").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let visited = Arc::clone(&visited);
                let url = url.clone();
                thread::spawn(move || visited.mark(&url))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&new| new)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(visited.len(), 1);
    }
}
