//! Record sources.
//!
//! The engine never fetches; callers obtain a [`Snapshot`] from a
//! [`RecordSource`] and query it. Snapshots are whole, immutable collections,
//! so a query sees either the collection before a refresh or the one after.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::error::SourceError;
use crate::traits::Record;

/// An immutable, shareable collection of records.
pub type Snapshot<R> = Arc<[R]>;

/// Supplies complete collections of one record kind.
pub trait RecordSource<R: Record> {
    /// Returns the current complete collection.
    fn fetch_all(&self) -> Result<Snapshot<R>, SourceError>;
}

/// In-memory source that swaps whole snapshots.
#[derive(Debug)]
pub struct SnapshotStore<R> {
    current: RwLock<Snapshot<R>>,
}

impl<R: Record> SnapshotStore<R> {
    /// Creates a store holding `records`, rejecting duplicate identifiers.
    pub fn new(records: Vec<R>) -> Result<Self, SourceError> {
        check_unique(&records)?;
        Ok(SnapshotStore {
            current: RwLock::new(Arc::from(records)),
        })
    }

    /// Replaces the collection, rejecting duplicate identifiers.
    ///
    /// Readers holding the previous snapshot keep it unchanged.
    pub fn publish(&self, records: Vec<R>) -> Result<(), SourceError> {
        check_unique(&records)?;
        let snapshot: Snapshot<R> = Arc::from(records);
        let len = snapshot.len();
        let mut current = self.current.write().map_err(|_| poisoned::<R>())?;
        *current = snapshot;
        tracing::debug!(
            target: "gridledger.seeker",
            kind = R::KIND,
            records = len,
            "snapshot published"
        );
        Ok(())
    }
}

impl<R: Record> Default for SnapshotStore<R> {
    fn default() -> Self {
        SnapshotStore {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl<R: Record> RecordSource<R> for SnapshotStore<R> {
    fn fetch_all(&self) -> Result<Snapshot<R>, SourceError> {
        let current = self.current.read().map_err(|_| poisoned::<R>())?;
        Ok(Arc::clone(&current))
    }
}

fn poisoned<R: Record>() -> SourceError {
    SourceError::Unavailable {
        kind: R::KIND.to_string(),
        reason: "snapshot lock poisoned".to_string(),
    }
}

fn check_unique<R: Record>(records: &[R]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(SourceError::DuplicateId {
                kind: R::KIND.to_string(),
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Meter(&'static str);

    impl Record for Meter {
        const KIND: &'static str = "meter";
        const FIELDS: &'static [&'static str] = &["id"];

        fn id(&self) -> &str {
            self.0
        }

        fn label(&self) -> &str {
            self.0
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "id" => Value::Text(self.0),
                _ => Value::Missing,
            }
        }
    }

    #[test]
    fn fetch_returns_published_snapshot() {
        let store = SnapshotStore::new(vec![Meter("M1")]).unwrap();
        let before = store.fetch_all().unwrap();

        store.publish(vec![Meter("M2"), Meter("M3")]).unwrap();
        let after = store.fetch_all().unwrap();

        assert_eq!(&*before, &[Meter("M1")]);
        assert_eq!(&*after, &[Meter("M2"), Meter("M3")]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let store = SnapshotStore::new(vec![Meter("M1")]).unwrap();
        let err = store.publish(vec![Meter("M2"), Meter("M2")]).unwrap_err();
        assert_eq!(
            err,
            SourceError::DuplicateId {
                kind: "meter".into(),
                id: "M2".into()
            }
        );
        assert_eq!(&*store.fetch_all().unwrap(), &[Meter("M1")]);
        assert!(SnapshotStore::new(vec![Meter("A"), Meter("A")]).is_err());
    }

    #[test]
    fn default_is_empty() {
        let store = SnapshotStore::<Meter>::default();
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn readers_see_whole_snapshots() {
        let store = Arc::new(SnapshotStore::new(vec![Meter("A1"), Meter("A2")]).unwrap());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    store.publish(vec![Meter("B1"), Meter("B2"), Meter("B3")]).unwrap();
                    store.publish(vec![Meter("A1"), Meter("A2")]).unwrap();
                }
            })
        };
        for _ in 0..100 {
            let snapshot = store.fetch_all().unwrap();
            let first = snapshot[0].0.as_bytes()[0];
            assert!(snapshot.iter().all(|m| m.0.as_bytes()[0] == first));
            assert_eq!(snapshot.len(), if first == b'A' { 2 } else { 3 });
        }
        writer.join().unwrap();
    }
}
