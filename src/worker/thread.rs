//! Background thread hosting a [`SettingsWorker`].
//!
//! Settings writes are fire-and-forget from the UI thread: [`WorkerHandle::post`]
//! only enqueues a message. Responses are collected later with
//! [`WorkerHandle::try_recv`] or [`WorkerHandle::drain`] and fed back into the
//! application as events. Messages are processed in the order they were posted,
//! so the last write per key wins.

use crate::domain::error::{Result, SwipeError};
use crate::worker::{SettingsWorker, WorkerMessage, WorkerResponse};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a running settings worker thread.
///
/// Dropping the handle closes the message channel and joins the thread after
/// it has processed everything already posted.
pub struct WorkerHandle {
    tx: Option<Sender<WorkerMessage>>,
    rx: Receiver<WorkerResponse>,
    join: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Moves `worker` onto a new thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(mut worker: SettingsWorker) -> Result<Self> {
        let (msg_tx, msg_rx) = mpsc::channel::<WorkerMessage>();
        let (resp_tx, resp_rx) = mpsc::channel::<WorkerResponse>();

        let join = thread::Builder::new()
            .name("swipe-settings-worker".to_string())
            .spawn(move || {
                tracing::debug!("settings worker started");
                for message in msg_rx {
                    let response = worker.handle(message);
                    if resp_tx.send(response).is_err() {
                        break;
                    }
                }
                tracing::debug!("settings worker stopped");
            })?;

        Ok(Self {
            tx: Some(msg_tx),
            rx: resp_rx,
            join: Some(join),
        })
    }

    /// Enqueues a message without waiting for it to be processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| SwipeError::Worker("worker channel closed".to_string()))?;

        tx.send(message)
            .map_err(|e| SwipeError::Worker(format!("failed to post message: {e}")))
    }

    /// Returns the next response if one is ready.
    #[must_use]
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        self.rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next response.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerResponse> {
        match self.rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Collects every response that is ready right now.
    #[must_use]
    pub fn drain(&self) -> Vec<WorkerResponse> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                tracing::error!("settings worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySettingsStorage;
    use serde_json::Value;

    #[test]
    fn responses_arrive_in_post_order() {
        let worker = SettingsWorker::with_storage(Box::new(MemorySettingsStorage::new()));
        let handle = WorkerHandle::spawn(worker).unwrap();

        handle
            .post(WorkerMessage::set_setting("left_post_action", Value::from("reply")))
            .unwrap();
        handle.post(WorkerMessage::LoadSettings).unwrap();

        let first = handle.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, WorkerResponse::SettingSaved { key: "left_post_action".into() });

        let Some(WorkerResponse::SettingsLoaded { settings }) = handle.recv_timeout(Duration::from_secs(5)) else {
            panic!("expected loaded settings");
        };
        assert_eq!(settings.get("left_post_action"), Some(&Value::from("reply")));
    }
}
