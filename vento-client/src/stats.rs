//! Client-side sales aggregation
//!
//! Pure computation over the loaded order list. Only completed orders
//! (listo/entregado) contribute to revenue; malformed totals and timestamps
//! were already coerced to 0 / "now" upstream, so nothing here can fail.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::Serialize;
use shared::util::coerce_timestamp;
use shared::Order;

/// Spanish weekday abbreviations, indexed by days since Monday
const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// One calendar day of the 7-day breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    /// Weekday abbreviation (Lun/Mar/...)
    pub day: String,
    pub revenue: f64,
    pub orders: u32,
}

/// Aggregated sales metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub completed_orders: u32,
    /// Revenue / completed orders; 0 when there are none
    pub average_order_value: f64,
    /// Completed revenue since midnight today
    pub revenue_today: f64,
    /// Completed revenue over the last 7 days
    pub revenue_week: f64,
    /// Completed revenue over the last 30 days
    pub revenue_month: f64,
    /// Exactly 7 entries, the calendar days ending today, oldest first
    pub daily: Vec<DailySales>,
}

/// Aggregate against the current wall clock.
pub fn aggregate(orders: &[Order]) -> SalesSummary {
    aggregate_at(orders, Utc::now())
}

/// Aggregate against an explicit "now", which also serves as the fallback
/// instant for unparseable order timestamps.
pub fn aggregate_at(orders: &[Order], now: DateTime<Utc>) -> SalesSummary {
    let today = now.date_naive();
    let start_of_today = today.and_time(NaiveTime::MIN).and_utc();
    let week_start = now - Duration::days(7);
    let month_start = now - Duration::days(30);

    let mut daily: Vec<DailySales> = (0..7)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            DailySales {
                day: WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize].to_string(),
                revenue: 0.0,
                orders: 0,
            }
        })
        .collect();

    let mut total_revenue = 0.0;
    let mut completed_orders = 0u32;
    let mut revenue_today = 0.0;
    let mut revenue_week = 0.0;
    let mut revenue_month = 0.0;

    for order in orders.iter().filter(|o| o.estado.is_completed()) {
        let amount = order.total;
        let created = coerce_timestamp(order.created_at.as_deref(), now);

        total_revenue += amount;
        completed_orders += 1;

        if created >= start_of_today {
            revenue_today += amount;
        }
        if created >= week_start {
            revenue_week += amount;
        }
        if created >= month_start {
            revenue_month += amount;
        }

        let days_back = today.signed_duration_since(created.date_naive()).num_days();
        if (0..7).contains(&days_back) {
            let slot = &mut daily[(6 - days_back) as usize];
            slot.revenue += amount;
            slot.orders += 1;
        }
    }

    let average_order_value = if completed_orders == 0 {
        0.0
    } else {
        total_revenue / completed_orders as f64
    };

    SalesSummary {
        total_revenue,
        completed_orders,
        average_order_value,
        revenue_today,
        revenue_week,
        revenue_month,
        daily,
    }
}
