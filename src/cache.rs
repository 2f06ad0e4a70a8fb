use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;

use crate::db::{models::RawSample, SampleSource};
use crate::error::Result;

type Slot = Option<Arc<Vec<RawSample>>>;

/// Single-slot memo over a [`SampleSource`].
///
/// The first successful load is kept until [`SampleCache::invalidate`].
/// Failed loads are never stored; an empty load is.
pub struct SampleCache<S> {
    source: S,
    slot: RwLock<Slot>,
}

impl<S: SampleSource> SampleCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get(&self) -> Result<Arc<Vec<RawSample>>> {
        {
            let slot = self.read_slot();
            if let Some(cached) = slot.as_ref() {
                return Ok(Arc::clone(cached));
            }
        }

        let mut slot = self.write_slot();
        // Another caller may have filled the slot while we waited.
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let loaded = Arc::new(self.source.load()?);
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    pub fn invalidate(&self) {
        let mut slot = self.write_slot();
        if slot.take().is_some() {
            info!("Raw sample cache cleared");
        }
    }

    #[cfg(test)]
    fn is_cached(&self) -> bool {
        self.read_slot().is_some()
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Slot> {
        match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Slot> {
        match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
        samples: Vec<RawSample>,
    }

    impl CountingSource {
        fn new(samples: Vec<RawSample>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: false,
                samples,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SampleSource for CountingSource {
        fn load(&self) -> Result<Vec<RawSample>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(DashboardError::unavailable(
                    "simulated outage",
                    rusqlite::Error::InvalidQuery,
                ));
            }
            Ok(self.samples.clone())
        }
    }

    fn sample() -> RawSample {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        RawSample::complete(ts, [14.0, 0.2, 0.3, 0.3, 0.4, 0.7])
    }

    #[test]
    fn loads_once_until_invalidated() {
        let cache = SampleCache::new(CountingSource::new(vec![sample()]));

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.source().calls(), 1);

        cache.invalidate();
        assert!(!cache.is_cached());
        cache.get().unwrap();
        assert_eq!(cache.source().calls(), 2);
    }

    #[test]
    fn empty_result_is_cached() {
        let cache = SampleCache::new(CountingSource::new(Vec::new()));

        assert!(cache.get().unwrap().is_empty());
        assert!(cache.get().unwrap().is_empty());
        assert_eq!(cache.source().calls(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut source = CountingSource::new(vec![sample()]);
        source.fail_first = true;
        let cache = SampleCache::new(source);

        assert!(matches!(
            cache.get(),
            Err(DashboardError::DataUnavailable { .. })
        ));
        assert!(!cache.is_cached());
        assert_eq!(cache.get().unwrap().len(), 1);
        assert_eq!(cache.source().calls(), 2);
    }
}
