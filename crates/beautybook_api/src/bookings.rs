// --- File: crates/beautybook_api/src/bookings.rs ---
use crate::client::ApiClient;
use beautybook_common::models::{
    Booking, BookingsPage, CreateBookingResponse, NewBooking, SlotsPage, SuccessResponse,
    TelegramUser,
};
use beautybook_common::services::{ApiFuture, BookingsApi};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingBody<'a> {
    #[serde(flatten)]
    booking: &'a NewBooking,
    telegram_user: Option<TelegramUser>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelBookingBody {
    booking_id: i64,
    action: &'static str,
}

impl BookingsApi for ApiClient {
    fn list_bookings(&self) -> ApiFuture<'_, Vec<Booking>> {
        Box::pin(async move {
            let request = self.http().get(&self.endpoints().bookings);
            let page: BookingsPage = self.send(request).await?;
            Ok(page.bookings)
        })
    }

    fn available_slots(&self, master_id: i64, date: NaiveDate) -> ApiFuture<'_, Vec<String>> {
        Box::pin(async move {
            let master_id = master_id.to_string();
            let date = date.format("%Y-%m-%d").to_string();
            let request = self.http().get(&self.endpoints().bookings).query(&[
                ("action", "slots"),
                ("master_id", master_id.as_str()),
                ("date", date.as_str()),
            ]);
            let page: SlotsPage = self.send(request).await?;
            Ok(page.slots)
        })
    }

    fn create_booking(&self, booking: NewBooking) -> ApiFuture<'_, CreateBookingResponse> {
        Box::pin(async move {
            let body = CreateBookingBody {
                booking: &booking,
                telegram_user: self.platform().user(),
            };
            let request = self.http().post(&self.endpoints().bookings).json(&body);
            let created: CreateBookingResponse = self.send(request).await?;
            info!(
                booking_id = created.booking_id,
                "booking created for {} {}",
                booking.date,
                booking.time.format("%H:%M")
            );
            Ok(created)
        })
    }

    fn cancel_booking(&self, booking_id: i64) -> ApiFuture<'_, SuccessResponse> {
        Box::pin(async move {
            let body = CancelBookingBody {
                booking_id,
                action: "cancel",
            };
            let request = self.http().put(&self.endpoints().bookings).json(&body);
            let response: SuccessResponse = self.send(request).await?;
            info!(booking_id, "booking cancelled");
            Ok(response)
        })
    }
}
