// --- File: crates/beautybook_notifications/src/panel.rs ---
use crate::item::{badge_label, NotificationItem};
use beautybook_common::log_error;
use beautybook_common::models::Notification;
use beautybook_common::services::NotificationsApi;
use beautybook_platform::{HapticFeedback, Platform};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub const PANEL_TITLE: &str = "Уведомления";
pub const MARK_ALL_LABEL: &str = "Прочитать все";
pub const EMPTY_STATE: &str = "Нет уведомлений";

#[derive(Debug, Default)]
struct PanelState {
    notifications: Vec<Notification>,
    unread_count: u32,
    is_open: bool,
}

/// What the bell and its popover render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub items: Vec<NotificationItem>,
    pub unread_count: u32,
    pub badge: Option<String>,
    /// "Прочитать все" is offered only while something is unread
    pub show_mark_all: bool,
    pub is_open: bool,
}

impl PanelView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone)]
pub struct NotificationPanel {
    api: Arc<dyn NotificationsApi>,
    platform: Arc<dyn Platform>,
    state: Arc<Mutex<PanelState>>,
}

impl NotificationPanel {
    pub fn new(api: Arc<dyn NotificationsApi>, platform: Arc<dyn Platform>) -> Self {
        Self {
            api,
            platform,
            state: Arc::new(Mutex::new(PanelState::default())),
        }
    }

    /// Loads now, then again on every tick of `every`, until the handle goes away.
    pub fn mount(&self, every: Duration) -> PanelHandle {
        let panel = self.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                panel.load().await;
            }
        });
        debug!(every_secs = every.as_secs(), "notification polling started");
        PanelHandle { task }
    }

    /// Re-fetches the list. Returns `false` when the fetch failed and the
    /// previous data was kept.
    pub async fn load(&self) -> bool {
        match self.api.list_notifications().await {
            Ok(page) => {
                let mut state = self.state.lock().await;
                state.notifications = page.notifications;
                state.unread_count = page.unread_count;
                true
            }
            Err(e) => {
                log_error(e, "Failed to load notifications");
                false
            }
        }
    }

    pub async fn view(&self) -> PanelView {
        let state = self.state.lock().await;
        PanelView {
            items: state.notifications.iter().map(NotificationItem::from).collect(),
            unread_count: state.unread_count,
            badge: badge_label(state.unread_count),
            show_mark_all: state.unread_count > 0,
            is_open: state.is_open,
        }
    }

    pub async fn unread_count(&self) -> u32 {
        self.state.lock().await.unread_count
    }

    pub async fn set_open(&self, open: bool) {
        self.state.lock().await.is_open = open;
    }

    pub async fn toggle(&self) -> bool {
        let mut state = self.state.lock().await;
        state.is_open = !state.is_open;
        state.is_open
    }

    /// Marks an unread item read and reloads. Read or unknown items are ignored.
    pub async fn click(&self, notification_id: i64) -> bool {
        let unread = {
            let state = self.state.lock().await;
            state
                .notifications
                .iter()
                .any(|n| n.id == notification_id && !n.is_read)
        };
        if !unread {
            return false;
        }

        match self.api.mark_as_read(notification_id).await {
            Ok(_) => {
                self.platform.haptic(HapticFeedback::Light);
                self.load().await;
                true
            }
            Err(e) => {
                log_error(e, "Failed to mark notification as read");
                false
            }
        }
    }

    pub async fn mark_all_read(&self) -> bool {
        if self.unread_count().await == 0 {
            return false;
        }

        match self.api.mark_all_as_read().await {
            Ok(_) => {
                info!("All notifications marked as read");
                self.platform.haptic(HapticFeedback::Medium);
                self.load().await;
                true
            }
            Err(e) => {
                log_error(e, "Failed to mark all notifications as read");
                false
            }
        }
    }
}

/// Keeps the polling task alive. Unmounting or dropping it stops the task.
#[derive(Debug)]
pub struct PanelHandle {
    task: JoinHandle<()>,
}

impl PanelHandle {
    pub fn unmount(self) {
        drop(self);
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PanelHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("notification polling stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beautybook_common::services::mock::MockNotificationsApi;
    use beautybook_platform::SignalRecorder;

    fn notification(id: i64, is_read: bool) -> Notification {
        Notification {
            id,
            kind: "booking_created".to_string(),
            title: "Запись создана".to_string(),
            message: format!("Запись #{}", id),
            is_read,
            created_at: "2025-11-05T10:15:00".to_string(),
        }
    }

    fn panel(
        notifications: Vec<Notification>,
    ) -> (NotificationPanel, Arc<MockNotificationsApi>, Arc<SignalRecorder>) {
        let api = Arc::new(MockNotificationsApi::new(notifications));
        let recorder = Arc::new(SignalRecorder::default());
        (
            NotificationPanel::new(api.clone(), recorder.clone()),
            api,
            recorder,
        )
    }

    #[tokio::test]
    async fn test_click_unread_marks_once_then_reloads_once() {
        let (panel, api, recorder) = panel(vec![notification(1, false)]);
        panel.load().await;

        assert!(panel.click(1).await);
        assert_eq!(api.calls(), vec!["list", "mark_as_read:1", "list"]);
        assert_eq!(recorder.haptics(), vec![HapticFeedback::Light]);

        let view = panel.view().await;
        assert_eq!(view.unread_count, 0);
        assert!(view.items[0].is_read);
    }

    #[tokio::test]
    async fn test_click_read_item_does_nothing() {
        let (panel, api, recorder) = panel(vec![notification(1, true)]);
        panel.load().await;

        assert!(!panel.click(1).await);
        assert!(!panel.click(99).await);
        assert_eq!(api.calls(), vec!["list"]);
        assert!(recorder.haptics().is_empty());
    }

    #[tokio::test]
    async fn test_mark_all_hidden_without_unread() {
        let (panel, api, _) = panel(vec![notification(1, true), notification(2, true)]);
        panel.load().await;

        let view = panel.view().await;
        assert!(!view.show_mark_all);
        assert_eq!(view.badge, None);
        assert!(!panel.mark_all_read().await);
        assert_eq!(api.count("mark_all_as_read"), 0);
    }

    #[tokio::test]
    async fn test_mark_all_read() {
        let notifications = (1..=12).map(|id| notification(id, false)).collect();
        let (panel, api, recorder) = panel(notifications);
        panel.load().await;

        let view = panel.view().await;
        assert!(view.show_mark_all);
        assert_eq!(view.badge.as_deref(), Some("9+"));

        assert!(panel.mark_all_read().await);
        assert_eq!(api.count("mark_all_as_read"), 1);
        assert_eq!(recorder.last_haptic(), Some(HapticFeedback::Medium));
        assert_eq!(panel.unread_count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_stale_data() {
        let (panel, api, _) = panel(vec![notification(1, false)]);
        assert!(panel.load().await);

        api.set_failing(true);
        assert!(!panel.load().await);
        assert!(!panel.click(1).await);

        let view = panel.view().await;
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.unread_count, 1);
    }

    #[tokio::test]
    async fn test_empty_state_and_toggle() {
        let (panel, _, _) = panel(Vec::new());
        panel.load().await;
        assert!(panel.view().await.is_empty());

        assert!(panel.toggle().await);
        assert!(panel.view().await.is_open);
        panel.set_open(false).await;
        assert!(!panel.view().await.is_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_until_unmounted() {
        let (panel, api, _) = panel(vec![notification(1, false)]);
        let handle = panel.mount(DEFAULT_POLL_INTERVAL);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(api.count("list"), 1);

        api.push(notification(2, false));
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(api.count("list"), 2);
        assert_eq!(panel.unread_count().await, 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(api.count("list"), 3);

        handle.unmount();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(api.count("list"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let (panel, api, _) = panel(Vec::new());
        {
            let handle = panel.mount(Duration::from_secs(5));
            tokio::time::sleep(Duration::from_secs(11)).await;
            assert!(handle.is_active());
        }
        let before = api.count("list");
        assert_eq!(before, 3);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.count("list"), before);
    }
}
