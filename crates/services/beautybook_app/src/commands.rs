// --- File: crates/services/beautybook_app/src/commands.rs ---
//! One function per subcommand. Each drives the same screen model the
//! Mini App uses and prints what that screen would show.

use crate::app_state::AppState;
use crate::error::AppError;
use beautybook_booking::DateRule;
use beautybook_common::display::format_long_date;
use beautybook_common::models::UserRole;
use beautybook_common::services::BookingsApi;
use beautybook_dashboard::{ClientDashboard, MasterDashboard, RootView};
use beautybook_notifications::panel::{EMPTY_STATE, MARK_ALL_LABEL, PANEL_TITLE};
use beautybook_notifications::{NotificationPanel, PanelView};
use beautybook_profile::display::{
    avatar_initial, bookings_label, full_name, last_name_or_placeholder, phone_or_placeholder,
    registered_on,
};
use beautybook_profile::ProfileEditor;
use chrono::{NaiveDate, NaiveTime};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

fn root_view(state: &AppState) -> RootView {
    RootView::new(
        Arc::new(state.client.clone()),
        state.platform.clone(),
        state.config.catalog.clone(),
        state.rule.clone(),
    )
}

fn notification_panel(state: &AppState) -> NotificationPanel {
    NotificationPanel::new(Arc::new(state.client.clone()), state.platform.clone())
}

fn profile_editor(state: &AppState) -> ProfileEditor {
    ProfileEditor::new(Arc::new(state.client.clone()), state.platform.clone())
}

fn print_client(dashboard: &ClientDashboard) {
    println!("Мои записи");
    if dashboard.appointments.is_empty() {
        println!("  (нет записей)");
    }
    for card in &dashboard.appointments {
        println!(
            "  #{} [{}] {} · {} · {} {} · {}",
            card.id,
            card.avatar,
            card.master_name,
            card.service_name,
            card.date,
            card.time,
            card.price
        );
        println!("      {}", card.status_label);
    }

    println!("Мастера");
    for master in &dashboard.masters {
        println!("  [{}] {} (id {})", master.avatar, master.name, master.master_id);
        for service in &master.services {
            println!(
                "      {} · {} · {} (service id {})",
                service.name, service.duration, service.price, service.service_id
            );
        }
    }
}

fn print_master(dashboard: &MasterDashboard) {
    println!("Записей: {}", dashboard.bookings_count);
    println!("Ожидаемый доход: {}", dashboard.revenue_label());

    println!("Расписание");
    for entry in &dashboard.schedule {
        println!(
            "  {} {} · {} · {}",
            format_long_date(entry.date),
            entry.time.format("%H:%M"),
            entry.service_name,
            entry.status_label
        );
    }

    println!("Мои услуги");
    for service in &dashboard.services {
        println!("  {} · {} · {}", service.name, service.duration, service.price);
        if !service.description.is_empty() {
            println!("      {}", service.description);
        }
    }
}

fn print_notifications(view: &PanelView) {
    match &view.badge {
        Some(badge) => println!("{} ({})", PANEL_TITLE, badge),
        None => println!("{}", PANEL_TITLE),
    }
    if view.is_empty() {
        println!("  {}", EMPTY_STATE);
        return;
    }
    for item in &view.items {
        let marker = if item.is_read { " " } else { "•" };
        println!(
            "{} #{} {} {} · {}",
            marker,
            item.id,
            item.kind.icon(),
            item.title,
            item.received
        );
        println!("      {}", item.message);
    }
    if view.show_mark_all {
        println!("  [{}]", MARK_ALL_LABEL);
    }
}

pub async fn bookings(state: &AppState) -> Result<(), AppError> {
    let mut view = root_view(state);
    view.open().await;
    print_client(&view.client_dashboard());
    Ok(())
}

pub async fn dashboard(state: &AppState, role: UserRole) -> Result<(), AppError> {
    let mut view = root_view(state);
    view.open().await;
    view.switch_role(role);
    match view.role() {
        UserRole::Client => print_client(&view.client_dashboard()),
        UserRole::Master => print_master(&view.master_dashboard()),
    }
    Ok(())
}

pub async fn slots(state: &AppState, master_id: i64, date: NaiveDate) -> Result<(), AppError> {
    let slots = state.client.available_slots(master_id, date).await?;
    println!("{}:", format_long_date(date));
    if slots.is_empty() {
        println!("  (нет свободного времени)");
    }
    for slot in slots {
        println!("  {}", slot);
    }
    Ok(())
}

pub async fn book(
    state: &AppState,
    master_id: i64,
    service_id: i64,
    date: Option<NaiveDate>,
    time: NaiveTime,
    notes: Option<String>,
) -> Result<(), AppError> {
    let date = booking_date(&state.rule, date)?;
    let mut view = root_view(state);
    view.start_booking(master_id, service_id)?;

    let picker = view
        .picker_mut()
        .ok_or_else(|| AppError::NotFound("booking picker".to_string()))?;
    picker.select_date(date)?;
    picker.select_time(time)?;
    if let Some(summary) = picker.summary() {
        println!("{}", picker.title());
        println!("  {} {} · {} · {}", summary.date, summary.time, summary.service, summary.total);
    }

    let created = view.confirm_booking(notes).await?;
    println!("Запись #{} создана", created.booking_id);
    Ok(())
}

/// The requested date, or the first open day within a week of today.
fn booking_date(rule: &DateRule, requested: Option<NaiveDate>) -> Result<NaiveDate, AppError> {
    match requested {
        Some(date) => Ok(date),
        None => rule
            .next_selectable(rule.today())
            .ok_or_else(|| AppError::NotFound("open day in the coming week".to_string())),
    }
}

pub async fn cancel(state: &AppState, booking_id: i64) -> Result<(), AppError> {
    let mut view = root_view(state);
    view.cancel_appointment(booking_id).await?;
    println!("Запись #{} отменена", booking_id);
    Ok(())
}

pub async fn notifications(state: &AppState, watch: bool) -> Result<(), AppError> {
    let panel = notification_panel(state);
    panel.set_open(true).await;

    if !watch {
        panel.load().await;
        print_notifications(&panel.view().await);
        return Ok(());
    }

    let every = Duration::from_secs(state.config.notifications.poll_interval_secs);
    info!("Watching notifications every {}s, Ctrl-C to stop", every.as_secs());
    watch_until(&panel, every, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await;
    Ok(())
}

/// Polls in the background and reprints the panel whenever it changes,
/// until `shutdown` resolves. Returns how many times the panel was printed.
async fn watch_until<F>(panel: &NotificationPanel, every: Duration, shutdown: F) -> usize
where
    F: Future<Output = ()>,
{
    let handle = panel.mount(every);
    tokio::pin!(shutdown);

    let mut shown: Option<PanelView> = None;
    let mut printed = 0;
    let mut redraw = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = redraw.tick() => {
                let view = panel.view().await;
                if shown.as_ref() != Some(&view) {
                    print_notifications(&view);
                    shown = Some(view);
                    printed += 1;
                }
            }
        }
    }

    handle.unmount();
    printed
}

pub async fn read(state: &AppState, notification_id: i64) -> Result<(), AppError> {
    let panel = notification_panel(state);
    panel.load().await;
    if !panel.click(notification_id).await {
        return Err(AppError::NotFound(format!(
            "Notification #{} is not unread",
            notification_id
        )));
    }
    print_notifications(&panel.view().await);
    Ok(())
}

pub async fn read_all(state: &AppState) -> Result<(), AppError> {
    let panel = notification_panel(state);
    panel.load().await;
    if panel.mark_all_read().await {
        println!("Все уведомления прочитаны");
    } else {
        println!("Нет непрочитанных уведомлений");
    }
    Ok(())
}

pub async fn profile(state: &AppState) -> Result<(), AppError> {
    let mut editor = profile_editor(state);
    if !editor.load().await {
        return Err(AppError::NotFound("Profile could not be loaded".to_string()));
    }
    let Some(profile) = editor.profile() else {
        return Ok(());
    };

    println!("[{}] {}", avatar_initial(&profile.first_name), full_name(profile));
    if !profile.username.is_empty() {
        println!("  @{}", profile.username);
    }
    println!("  {}", bookings_label(profile));
    println!("  Имя: {}", profile.first_name);
    println!("  Фамилия: {}", last_name_or_placeholder(profile));
    println!("  Телефон: {}", phone_or_placeholder(profile));
    if let Some(registered) = registered_on(profile) {
        println!("  Дата регистрации: {}", registered);
    }
    Ok(())
}

pub async fn update_profile(
    state: &AppState,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
) -> Result<(), AppError> {
    let mut editor = profile_editor(state);
    if !editor.load().await {
        return Err(AppError::NotFound("Profile could not be loaded".to_string()));
    }
    editor.start_editing()?;
    if let Some(first_name) = first_name {
        editor.set_first_name(first_name);
    }
    if let Some(last_name) = last_name {
        editor.set_last_name(last_name);
    }
    if let Some(phone) = phone {
        editor.set_phone(phone);
    }
    editor.save().await?;
    println!("Профиль сохранён");
    profile(state).await
}
