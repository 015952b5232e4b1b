//! Latest-upload store
//!
//! Every upload takes a ticket before decoding starts. A finished upload is
//! only published when its ticket is newer than the one currently published,
//! so a slow upload can never replace the result of a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::pipeline::ProcessOutcome;
use crate::types::Language;

/// A processed upload as served by the API
#[derive(Debug, Clone)]
pub struct PublishedUpload {
    pub upload_id: u64,
    pub language: Language,
    pub outcome: ProcessOutcome,
}

#[derive(Debug, Default)]
pub struct UploadStore {
    next_ticket: AtomicU64,
    current: RwLock<Option<Arc<PublishedUpload>>>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the id of a new upload (ids start at 1)
    pub fn begin(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish `upload` unless a newer upload is already published.
    ///
    /// Returns whether the upload became current.
    pub async fn publish(&self, upload: PublishedUpload) -> bool {
        let mut current = self.current.write().await;
        if let Some(existing) = current.as_ref() {
            if existing.upload_id > upload.upload_id {
                debug!(
                    stale = upload.upload_id,
                    current = existing.upload_id,
                    "discarding stale upload"
                );
                return false;
            }
        }
        info!(upload_id = upload.upload_id, "published upload");
        *current = Some(Arc::new(upload));
        true
    }

    pub async fn current(&self) -> Option<Arc<PublishedUpload>> {
        self.current.read().await.clone()
    }
}
