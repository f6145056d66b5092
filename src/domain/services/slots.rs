use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};

use crate::domain::models::booking::Booking;
use crate::domain::models::schedule::DaySchedule;
use crate::domain::models::service::Service;

const TOTAL_MINUTES: usize = 1440;

pub const SLOT_INTERVAL_MIN: usize = 30;

/// Computes the bookable start times ("HH:MM") for one day: the full
/// duration fits inside an open range, the slot starts after `now`, and
/// fewer than `service.capacity` bookings cover every minute of it.
pub fn calculate_slots(
    day: &DaySchedule,
    service: &Service,
    date: NaiveDate,
    existing_bookings: &[Booking],
    now: DateTime<Utc>,
) -> Vec<String> {
    if !day.is_active {
        return Vec::new();
    }

    let duration_min = service.duration_min as usize;
    if duration_min == 0 {
        return Vec::new();
    }
    let capacity = service.capacity.max(1);

    let day_start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
    let day_end = day_start + Duration::minutes(TOTAL_MINUTES as i64);

    let mut minute_counts = [0u8; TOTAL_MINUTES];

    for booking in existing_bookings {
        let b_start = booking.start_time.max(day_start);
        let b_end = booking.end_time.min(day_end);

        if b_start < b_end {
            let s_idx = ((b_start - day_start).num_minutes()).clamp(0, TOTAL_MINUTES as i64) as usize;
            let e_idx = ((b_end - day_start).num_minutes()).clamp(0, TOTAL_MINUTES as i64) as usize;

            for count in &mut minute_counts[s_idx..e_idx] {
                *count = count.saturating_add(1);
            }
        }
    }

    let mut valid_slots = Vec::new();

    for range in &day.time_slots {
        let Ok((start, end)) = range.parse() else {
            continue;
        };

        let win_start_idx = (start.hour() * 60 + start.minute()) as usize;
        let mut win_end_idx = (end.hour() * 60 + end.minute()) as usize;
        if win_end_idx == 1439 {
            win_end_idx = 1440;
        }

        let mut cursor = win_start_idx;
        while cursor + duration_min <= win_end_idx {
            let slot_start = day_start + Duration::minutes(cursor as i64);

            let mut is_capacity_ok = true;
            for count in &minute_counts[cursor..cursor + duration_min] {
                if *count as i32 >= capacity {
                    is_capacity_ok = false;
                    break;
                }
            }

            if slot_start > now && is_capacity_ok {
                valid_slots.push(format!("{:02}:{:02}", cursor / 60, cursor % 60));
            }

            cursor += SLOT_INTERVAL_MIN;
        }
    }

    valid_slots.sort();
    valid_slots.dedup();
    valid_slots
}

// Legacy fixed sweep: every half hour from 08:00 through 17:30, ignoring
// both schedule and service. The live slot endpoint calls
// `calculate_slots` instead.
pub fn fixed_cadence_slots() -> Vec<String> {
    let mut slots = Vec::new();
    for hour in 8..18 {
        slots.push(format!("{:02}:00", hour));
        slots.push(format!("{:02}:30", hour));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{Booking, NewBookingParams};
    use crate::domain::models::schedule::TimeRange;
    use crate::domain::models::service::{NewServiceParams, Service};

    fn service(duration_min: i32, capacity: i32) -> Service {
        Service::new(NewServiceParams {
            business_id: "biz1".into(),
            category_id: None,
            name: "Consultation".into(),
            duration_min,
            price_cents: 5000,
            capacity,
            options: vec![],
        })
    }

    fn open_day(ranges: &[(&str, &str)]) -> DaySchedule {
        DaySchedule {
            is_active: true,
            time_slots: ranges
                .iter()
                .map(|(s, e)| TimeRange { start: (*s).into(), end: (*e).into() })
                .collect(),
        }
    }

    fn booking_at(date: NaiveDate, time: &str, duration_min: i32) -> Booking {
        Booking::new(NewBookingParams {
            business_id: "biz1".into(),
            service_id: "svc1".into(),
            service_name: "Consultation".into(),
            date,
            time: time.into(),
            duration_min,
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: "jean@example.com".into(),
            phone: None,
            notes: None,
        })
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    // `now` well before the test date so no cutoff interferes.
    fn long_ago() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn inactive_day_yields_no_slots() {
        let mut day = open_day(&[("09:00", "17:00")]);
        day.is_active = false;
        assert!(calculate_slots(&day, &service(30, 1), date(), &[], long_ago()).is_empty());
    }

    #[test]
    fn active_day_without_ranges_yields_no_slots() {
        let day = open_day(&[]);
        assert!(calculate_slots(&day, &service(30, 1), date(), &[], long_ago()).is_empty());
    }

    #[test]
    fn sweeps_each_range_at_half_hour_cadence() {
        let day = open_day(&[("09:00", "11:00"), ("14:00", "15:00")]);
        let slots = calculate_slots(&day, &service(30, 1), date(), &[], long_ago());
        assert_eq!(slots, vec!["09:00", "09:30", "10:00", "10:30", "14:00", "14:30"]);
    }

    #[test]
    fn duration_must_fit_before_range_end() {
        let day = open_day(&[("09:00", "10:00")]);
        let slots = calculate_slots(&day, &service(45, 1), date(), &[], long_ago());
        assert_eq!(slots, vec!["09:00"]);
    }

    #[test]
    fn existing_booking_blocks_overlapping_slots() {
        let day = open_day(&[("09:00", "11:00")]);
        let taken = booking_at(date(), "09:30", 30);
        let slots = calculate_slots(&day, &service(30, 1), date(), &[taken], long_ago());
        assert_eq!(slots, vec!["09:00", "10:00", "10:30"]);
    }

    #[test]
    fn long_booking_blocks_every_covered_slot() {
        let day = open_day(&[("09:00", "12:00")]);
        let taken = booking_at(date(), "09:00", 90);
        let slots = calculate_slots(&day, &service(30, 1), date(), &[taken], long_ago());
        assert_eq!(slots, vec!["10:30", "11:00", "11:30"]);
    }

    #[test]
    fn capacity_two_keeps_slot_with_one_booking() {
        let day = open_day(&[("09:00", "10:00")]);
        let taken = booking_at(date(), "09:00", 30);
        let slots = calculate_slots(&day, &service(30, 2), date(), &[taken.clone()], long_ago());
        assert_eq!(slots, vec!["09:00", "09:30"]);

        let second = booking_at(date(), "09:00", 30);
        let slots = calculate_slots(&day, &service(30, 2), date(), &[taken, second], long_ago());
        assert_eq!(slots, vec!["09:30"]);
    }

    #[test]
    fn slots_at_or_before_now_are_dropped_for_today() {
        let day = open_day(&[("09:00", "12:00")]);
        let now = Utc.with_ymd_and_hms(2026, 9, 7, 10, 0, 0).unwrap();
        let slots = calculate_slots(&day, &service(30, 1), date(), &[], now);
        // 10:00 itself is not bookable anymore.
        assert_eq!(slots, vec!["10:30", "11:00", "11:30"]);
    }

    #[test]
    fn past_date_yields_no_slots() {
        let day = open_day(&[("09:00", "12:00")]);
        let now = Utc.with_ymd_and_hms(2026, 9, 8, 0, 0, 0).unwrap();
        assert!(calculate_slots(&day, &service(30, 1), date(), &[], now).is_empty());
    }

    #[test]
    fn overlapping_ranges_do_not_duplicate_slots() {
        let day = open_day(&[("09:00", "11:00"), ("10:00", "12:00")]);
        let slots = calculate_slots(&day, &service(30, 1), date(), &[], long_ago());
        assert_eq!(slots, vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]);
    }

    #[test]
    fn zero_duration_service_yields_no_slots() {
        let day = open_day(&[("09:00", "17:00")]);
        assert!(calculate_slots(&day, &service(0, 1), date(), &[], long_ago()).is_empty());
    }

    #[test]
    fn fixed_cadence_list_is_pinned() {
        let slots = fixed_cadence_slots();
        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:30"));
        let expected: Vec<String> = [
            "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00",
            "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
            "17:00", "17:30",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn fixed_cadence_diverges_from_schedule_aware_output() {
        // The legacy sweep emits slots even for a day the schedule marks
        // closed; the schedule-aware computation does not.
        let mut day = open_day(&[("09:00", "17:00")]);
        day.is_active = false;
        assert!(calculate_slots(&day, &service(30, 1), date(), &[], long_ago()).is_empty());
        assert_eq!(fixed_cadence_slots().len(), 20);
    }
}
