//! Transient notifications ("toasts") shown in the corner of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::crud::notify::{NoticeLevel, Notifier, SESSION_EXPIRED_MESSAGE};
use super::icons::icon;

const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notification area provided to the whole app via context.
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
    on_session_expired: StoredValue<Option<Callback<()>>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            on_session_expired: StoredValue::new(None),
        }
    }

    /// Run `handler` whenever a signed-in request is answered with 401.
    pub fn on_session_expired(&self, handler: Callback<()>) {
        self.on_session_expired.set_value(Some(handler));
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.try_update(|n| n.retain(|notice| notice.id != id));
    }

    fn push(&self, level: NoticeLevel, message: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        match level {
            NoticeLevel::Error => log::warn!("notify: {}", message),
            _ => log::info!("notify: {}", message),
        }
        self.notices.try_update(|n| n.push(Notice { id, level, message }));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, level: NoticeLevel, message: String) {
        self.push(level, message);
    }

    fn session_expired(&self) {
        self.push(NoticeLevel::Info, SESSION_EXPIRED_MESSAGE.to_string());
        if let Some(handler) = self.on_session_expired.get_value() {
            handler.run(());
        }
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the active notices. Mounted once at the app root.
#[component]
pub fn Toasts() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toasts">
            <For
                each=move || service.notices()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.level {
                        NoticeLevel::Success => "toast toast--success",
                        NoticeLevel::Error => "toast toast--error",
                        NoticeLevel::Info => "toast toast--info",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{notice.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
