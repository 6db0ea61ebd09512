//! A single typed document collection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Document, DocumentId};

/// Documents of one type, keyed by id.
///
/// Every operation runs inside one critical section on the collection's
/// lock. When a snapshot path is set, each mutation rewrites the snapshot
/// before the lock is released; a failed write rolls the mutation back.
pub struct Collection<T: Document> {
    documents: RwLock<BTreeMap<DocumentId, T>>,
    snapshot: Option<PathBuf>,
}

impl<T: Document> Collection<T> {
    /// Creates an empty collection that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
            snapshot: None,
        }
    }

    /// Opens the collection backed by `<dir>/<collection>.json`.
    ///
    /// A missing snapshot file yields an empty collection.
    pub async fn open(dir: &Path) -> ServiceResult<Self> {
        let path = dir.join(format!("{}.json", T::COLLECTION));
        let documents = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let records: Vec<T> =
                    serde_json::from_slice(&bytes).map_err(|e| storage_error::<T, _>(e))?;
                records
                    .into_iter()
                    .map(|record| (record.id().clone(), record))
                    .collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(storage_error::<T, _>(e)),
        };
        debug!(
            collection = T::COLLECTION,
            documents = documents.len(),
            "Opened collection snapshot"
        );
        Ok(Self {
            documents: RwLock::new(documents),
            snapshot: Some(path),
        })
    }

    /// The collection's name.
    pub fn name(&self) -> &'static str {
        T::COLLECTION
    }

    /// Number of stored documents.
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Stores a new document and returns it.
    pub async fn insert(&self, document: T) -> ServiceResult<T> {
        let mut documents = self.documents.write().await;
        let id = document.id().clone();
        documents.insert(id.clone(), document.clone());
        if let Err(e) = self.persist(&documents).await {
            documents.remove(&id);
            return Err(e);
        }
        debug!(collection = T::COLLECTION, id = %id, "Inserted document");
        Ok(document)
    }

    /// Looks up a document by its textual id.
    ///
    /// Ids that are not well formed are reported as not found.
    pub async fn find_by_id(&self, id: &str) -> ServiceResult<T> {
        let key = parse_id::<T>(id)?;
        self.documents
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(T::RESOURCE, id))
    }

    /// Returns every document matching `filter`, oldest first.
    pub async fn find_many<F>(&self, filter: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let documents = self.documents.read().await;
        let mut matches: Vec<T> = documents.values().filter(|d| filter(d)).cloned().collect();
        matches.sort_by(|a, b| {
            a.meta()
                .created_at
                .cmp(&b.meta().created_at)
                .then_with(|| a.id().cmp(b.id()))
        });
        matches
    }

    /// Returns every document, oldest first.
    pub async fn find_all(&self) -> Vec<T> {
        self.find_many(|_| true).await
    }

    /// Applies `patch` to a copy of the stored document and writes it back.
    ///
    /// If `patch` fails the stored document is left untouched. Concurrent
    /// updates to the same document are applied in lock order, so the last
    /// writer wins.
    pub async fn update<F>(&self, id: &str, patch: F) -> ServiceResult<T>
    where
        F: FnOnce(&mut T) -> ServiceResult<()>,
    {
        let key = parse_id::<T>(id)?;
        let mut documents = self.documents.write().await;
        let current = documents
            .get(&key)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(T::RESOURCE, id))?;

        let mut updated = current.clone();
        patch(&mut updated)?;
        updated.meta_mut().touch();

        documents.insert(key.clone(), updated.clone());
        if let Err(e) = self.persist(&documents).await {
            documents.insert(key, current);
            return Err(e);
        }
        debug!(collection = T::COLLECTION, id = %key, "Updated document");
        Ok(updated)
    }

    async fn persist(&self, documents: &BTreeMap<DocumentId, T>) -> ServiceResult<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        let records: Vec<&T> = documents.values().collect();
        let bytes = serde_json::to_vec_pretty(&records).map_err(|e| storage_error::<T, _>(e))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| storage_error::<T, _>(e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| storage_error::<T, _>(e))
    }
}

fn parse_id<T: Document>(id: &str) -> ServiceResult<DocumentId> {
    DocumentId::parse(id).ok_or_else(|| ServiceError::not_found(T::RESOURCE, id))
}

fn storage_error<T: Document, E: std::fmt::Display>(error: E) -> ServiceError {
    ServiceError::Storage {
        collection: T::COLLECTION.to_string(),
        message: error.to_string(),
    }
}
