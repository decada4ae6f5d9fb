mod common {
    use async_trait::async_trait;
    use crate::store::read_queue::BatchRead;
    use crate::types::{IconName, IconRecord};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Scripted reader: counts calls, optionally sleeps or fails, and
    /// resolves every name not starting with `missing`.
    pub(super) struct CountingReader {
        pub(super) calls: AtomicUsize,
        delay: Duration,
        error: Option<String>,
    }

    impl CountingReader {
        pub(super) fn instant() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
                error: None,
            }
        }

        pub(super) fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::instant()
            }
        }

        pub(super) fn failing(message: &str) -> Self {
            Self {
                error: Some(message.to_string()),
                ..Self::instant()
            }
        }

        pub(super) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BatchRead for CountingReader {
        async fn read_batch(
            &self,
            names: Vec<IconName>,
        ) -> Result<Vec<Option<IconRecord>>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if let Some(message) = &self.error {
                return Err(message.clone());
            }
            Ok(names
                .iter()
                .map(|name| {
                    (!name.starts_with("missing"))
                        .then(|| IconRecord::from_path(format!("path:{name}")))
                })
                .collect())
        }
    }

    pub(super) fn make_name(s: &str) -> IconName {
        IconName::try_from(s).unwrap()
    }
}

mod coalescing {
    use super::common::{CountingReader, make_name};
    use crate::store::read_queue::ReadQueue;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_concurrent_reads_share_one_batch() {
        let reader = Arc::new(CountingReader::instant());
        let queue = ReadQueue::new(reader.clone(), Duration::from_secs(1));

        let (a, b, c) = tokio::join!(
            queue.read(make_name("thermostat")),
            queue.read(make_name("sofa")),
            queue.read(make_name("fan")),
        );

        assert!(a.unwrap().is_some());
        assert!(b.unwrap().is_some());
        assert!(c.unwrap().is_some());
        assert_eq!(reader.call_count(), 1);
    }

    #[tokio::test]
    async fn test_results_map_to_each_name() {
        let reader = Arc::new(CountingReader::instant());
        let queue = ReadQueue::new(reader, Duration::from_secs(1));

        let (hit, miss) = tokio::join!(
            queue.read(make_name("thermostat")),
            queue.read(make_name("missing-icon")),
        );

        assert_eq!(hit.unwrap().unwrap().path, "path:thermostat");
        assert!(miss.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sequential_reads_drain_separately() {
        let reader = Arc::new(CountingReader::instant());
        let queue = ReadQueue::new(reader.clone(), Duration::from_secs(1));

        queue.read(make_name("thermostat")).await.unwrap();
        queue.read(make_name("sofa")).await.unwrap();

        assert_eq!(reader.call_count(), 2);
    }
}

mod failures {
    use super::common::{CountingReader, make_name};
    use crate::store::read_queue::ReadQueue;
    use crate::store::read_queue::error::StoreReadError;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_timeout_fails_whole_batch() {
        let reader = Arc::new(CountingReader::slow(Duration::from_millis(200)));
        let queue = ReadQueue::new(reader, Duration::from_millis(50));

        let (a, b) = tokio::join!(
            queue.read(make_name("thermostat")),
            queue.read(make_name("sofa")),
        );

        assert!(matches!(a, Err(StoreReadError::TimedOut)));
        assert!(matches!(b, Err(StoreReadError::TimedOut)));
    }

    #[tokio::test]
    async fn test_reader_error_reaches_every_waiter() {
        let reader = Arc::new(CountingReader::failing("disk gone"));
        let queue = ReadQueue::new(reader, Duration::from_secs(1));

        let (a, b) = tokio::join!(
            queue.read(make_name("thermostat")),
            queue.read(make_name("sofa")),
        );

        let Err(StoreReadError::Failed(message)) = a else {
            panic!("expected failed read, got {a:?}");
        };
        assert!(message.contains("disk gone"));
        assert!(matches!(b, Err(StoreReadError::Failed(_))));
    }
}

mod store_reader {
    use super::common::make_name;
    use crate::store::IconStore;
    use crate::store::read_queue::{ReadQueue, StoreReader};
    use crate::types::{Config, IconRecord};
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_records_from_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf(), "http://unused.invalid");
        let store = IconStore::open(&config, "7.4.47").unwrap();
        store
            .put_batch(&[(make_name("thermostat"), IconRecord::from_path("M1 2"))])
            .unwrap();

        let reader = Arc::new(StoreReader::new(Arc::new(store)));
        let queue = ReadQueue::new(reader, Duration::from_secs(1));

        let record = queue.read(make_name("thermostat")).await.unwrap();
        assert_eq!(record.unwrap().path, "M1 2");

        let miss = queue.read(make_name("sofa")).await.unwrap();
        assert!(miss.is_none());
    }
}
