use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{booking, business, category, health, schedule, service};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Businesses
        .route("/api/v1/businesses", post(business::create_business))
        .route("/api/v1/businesses/by-slug/{slug}", get(business::get_business_by_slug))
        .route(
            "/api/v1/businesses/{business_id}",
            get(business::get_business).put(business::update_business),
        )

        // Categories
        .route(
            "/api/v1/{business_id}/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/api/v1/{business_id}/categories/{category_id}",
            delete(category::delete_category),
        )

        // Services
        .route(
            "/api/v1/{business_id}/services",
            get(service::list_services).post(service::create_service),
        )
        .route(
            "/api/v1/{business_id}/services/{service_id}",
            get(service::get_service)
                .put(service::update_service)
                .delete(service::delete_service),
        )

        // Schedule sets
        .route(
            "/api/v1/{business_id}/schedules",
            get(schedule::list_schedules).post(schedule::create_schedule),
        )
        .route("/api/v1/{business_id}/schedules/{schedule_id}", get(schedule::get_schedule))
        .route(
            "/api/v1/{business_id}/schedules/{schedule_id}/activate",
            put(schedule::activate_schedule),
        )
        .route(
            "/api/v1/{business_id}/schedules/{schedule_id}/days/{weekday}/toggle",
            post(schedule::toggle_day),
        )
        .route(
            "/api/v1/{business_id}/schedules/{schedule_id}/days/{weekday}/ranges",
            post(schedule::add_time_range),
        )
        .route(
            "/api/v1/{business_id}/schedules/{schedule_id}/days/{weekday}/ranges/{index}",
            put(schedule::update_time_range).delete(schedule::remove_time_range),
        )

        // Public booking flow
        .route(
            "/api/v1/{business_id}/services/{service_id}/slots",
            get(booking::get_slots),
        )
        .route("/api/v1/{business_id}/availability", get(booking::check_availability))
        .route("/api/v1/{business_id}/book", post(booking::create_booking))

        // Staff booking management
        .route("/api/v1/{business_id}/bookings", get(booking::list_bookings))
        .route(
            "/api/v1/{business_id}/bookings/{booking_id}",
            get(booking::get_booking).delete(booking::delete_booking),
        )
        .route(
            "/api/v1/{business_id}/bookings/{booking_id}/confirm",
            post(booking::confirm_booking),
        )
        .route(
            "/api/v1/{business_id}/bookings/{booking_id}/cancel",
            post(booking::cancel_booking),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        "started processing request: {} {}",
                        request.method(),
                        request.uri().path()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("request failed: {:?}", error);
                    },
                ),
        )
        .with_state(state)
}
