use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool as RedisPool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn probe_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

async fn database_ok(db: &DatabaseConnection) -> bool {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(ping).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: database ping failed");
            false
        }
    }
}

async fn redis_ok(pool: &RedisPool) -> bool {
    let mut conn = match pool.get().await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: no redis connection");
            return false;
        }
    };
    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: redis ping failed");
            false
        }
    }
}

/// Liveness probe, no I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness probe: database `SELECT 1` and redis `PING`.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<RedisPool>>,
) -> impl Responder {
    let (db_ok, redis_ok) = tokio::join!(database_ok(&db), redis_ok(&redis));

    let body = ReadinessResponse {
        status: probe_status(db_ok && redis_ok),
        database: probe_status(db_ok),
        redis: probe_status(redis_ok),
    };

    if db_ok && redis_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
