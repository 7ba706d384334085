//! Per-user statistics.

use actix_web::{HttpResponse, web};

use dreamlog_core::stats::{self, MonthlyReport};
use dreamlog_shared::dto::{
    DreamStats, DreamTotalResponse, MonthQuery, MonthlyStatsResponse, SleepStats,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(report: MonthlyReport) -> MonthlyStatsResponse {
    let MonthlyReport {
        month,
        sleep,
        dream,
        skipped,
    } = report;

    MonthlyStatsResponse {
        month,
        sleep: SleepStats {
            good: sleep.good,
            average: sleep.average,
            poor: sleep.poor,
        },
        dream: DreamStats {
            normal: dream.normal,
            lucid: dream.lucid,
            recurring: dream.recurring,
            nightmare: dream.nightmare,
        },
        skipped,
    }
}

/// GET /api/dreams
pub async fn dream_total(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let total = state.posts.count_by_owner_email(&identity.email).await?;

    Ok(HttpResponse::Ok().json(DreamTotalResponse {
        total_dreams: total,
    }))
}

/// GET /api/data?month=
pub async fn monthly(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<MonthQuery>,
) -> AppResult<HttpResponse> {
    let selector = query.into_inner().month;

    let report =
        stats::monthly_report(state.posts.as_ref(), &identity.email, selector.as_deref()).await?;

    if report.skipped > 0 {
        tracing::warn!(
            user_id = %identity.user_id,
            skipped = report.skipped,
            "Posts with unreadable dates left out of monthly statistics"
        );
    }
    if report.month.is_none() {
        tracing::debug!(selector = ?selector, "No valid month selected");
    }

    Ok(HttpResponse::Ok().json(to_response(report)))
}
