// tests/support/mocks/repos.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::locale::Locale;
use sluggable::domain::slug::{SlugReadRepository, SlugValue, SlugWriteRepository, Sluggable};

/// In-memory slug table with the uniqueness rule a real store would enforce.
pub struct InMemorySlugRepo<E> {
    rows: Mutex<Vec<E>>,
    unavailable: AtomicBool,
    exact_lookups: AtomicUsize,
    containing_scans: AtomicUsize,
}

impl<E: Sluggable + Clone> InMemorySlugRepo<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self {
            rows: Mutex::new(rows),
            unavailable: AtomicBool::new(false),
            exact_lookups: AtomicUsize::new(0),
            containing_scans: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Makes every subsequent call fail like a lost connection.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub fn exact_lookups(&self) -> usize {
        self.exact_lookups.load(Ordering::SeqCst)
    }

    pub fn containing_scans(&self) -> usize {
        self.containing_scans.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }

    fn check_online(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(())
    }
}

fn collides(existing: &SlugValue, candidate: &SlugValue) -> bool {
    match candidate {
        SlugValue::Single(Some(slug)) => existing.matches(None, slug.as_str()),
        SlugValue::Single(None) => false,
        SlugValue::Translated(map) => map.iter().any(|(locale, slug)| {
            slug.as_ref()
                .is_some_and(|slug| existing.matches(Some(locale), slug.as_str()))
        }),
    }
}

#[async_trait]
impl<E: Sluggable + Clone + 'static> SlugReadRepository<E> for InMemorySlugRepo<E> {
    async fn find_exact(
        &self,
        _field: &str,
        locale: Option<&Locale>,
        value: &str,
    ) -> DomainResult<Vec<E>> {
        self.check_online()?;
        self.exact_lookups.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.slug().matches(locale, value))
            .cloned()
            .collect())
    }

    async fn find_all_containing(&self, _field: &str, value: &str) -> DomainResult<Vec<E>> {
        self.check_online()?;
        self.containing_scans.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.slug().is_translated() && row.slug().contains(value))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<E: Sluggable + Clone + 'static> SlugWriteRepository<E> for InMemorySlugRepo<E> {
    async fn insert(&self, entity: E) -> DomainResult<E> {
        self.check_online()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| collides(row.slug(), entity.slug())) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        rows.push(entity.clone());
        Ok(entity)
    }
}
