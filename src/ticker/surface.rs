use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_channel::Sender;

use crate::error::SurfaceError;

/// The host element a countdown is shown on.
///
/// A ticker reads the countdown attribute once when it starts and then only
/// ever overwrites the text.
#[async_trait::async_trait]
pub trait DisplaySurface: Send + Sync + 'static {
    /// Identifier used in logs and by [`crate::TickerSet`].
    fn id(&self) -> &str;

    /// Comma-separated target timestamps in epoch seconds.
    fn countdown_attribute(&self) -> String;

    /// Replace the displayed text.
    async fn set_text(&self, text: &str) -> Result<(), SurfaceError>;
}

#[async_trait::async_trait]
impl<T: DisplaySurface + ?Sized> DisplaySurface for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn countdown_attribute(&self) -> String {
        (**self).countdown_attribute()
    }

    async fn set_text(&self, text: &str) -> Result<(), SurfaceError> {
        (**self).set_text(text).await
    }
}

/// A text write coming out of a [`ChannelSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUpdate {
    pub id: String,
    pub text: String,
}

/// Surface that forwards every write into a channel.
pub struct ChannelSurface {
    id: String,
    attribute: String,
    sender: Sender<TextUpdate>,
}

impl ChannelSurface {
    pub fn new(
        id: impl Into<String>,
        attribute: impl Into<String>,
        sender: Sender<TextUpdate>,
    ) -> Self {
        Self {
            id: id.into(),
            attribute: attribute.into(),
            sender,
        }
    }
}

#[async_trait::async_trait]
impl DisplaySurface for ChannelSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn countdown_attribute(&self) -> String {
        self.attribute.clone()
    }

    async fn set_text(&self, text: &str) -> Result<(), SurfaceError> {
        let update = TextUpdate {
            id: self.id.clone(),
            text: text.to_string(),
        };
        self.sender
            .send(update)
            .await
            .map_err(|_| SurfaceError::Closed)
    }
}

/// Surface that keeps the last text in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    id: String,
    attribute: String,
    text: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySurface {
    pub fn new(id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attribute: attribute.into(),
            ..Default::default()
        }
    }

    /// The text currently shown, `None` if nothing was written yet.
    pub fn text(&self) -> Result<Option<String>, SurfaceError> {
        let text = self.text.lock().map_err(|_| SurfaceError::Poisoned)?;
        Ok(text.clone())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl DisplaySurface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn countdown_attribute(&self) -> String {
        self.attribute.clone()
    }

    async fn set_text(&self, text: &str) -> Result<(), SurfaceError> {
        let mut current = self.text.lock().map_err(|_| SurfaceError::Poisoned)?;
        *current = Some(text.to_string());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
