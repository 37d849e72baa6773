use crate::Image;

use std::collections::VecDeque;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

/// In-memory list of posted images, oldest first.
///
/// Holds at most `capacity` entries; pushing past that drops the oldest.
/// Nothing is persisted.
#[derive(Clone)]
pub struct ImageStore {
    images: Arc<RwLock<VecDeque<Image>>>,
    capacity: usize,
}

impl ImageStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            images: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(64)))),
            capacity,
        }
    }

    /// Append an image, returning the one dropped to make room (if any)
    pub async fn push(&self, image: Image) -> Option<Image> {
        let mut images = self.images.write().await;

        let dropped = if images.len() >= self.capacity {
            images.pop_front()
        } else {
            None
        };
        if let Some(ref old) = dropped {
            debug!("Image store full, dropped {}", old.url);
        }

        images.push_back(image);
        dropped
    }

    /// Snapshot of every stored image, oldest first
    pub async fn list(&self) -> Vec<Image> {
        self.images.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
