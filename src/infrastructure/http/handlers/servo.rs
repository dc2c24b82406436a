//! Servo HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::PulseServo;
use crate::infrastructure::http::dto::ServoResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 触发一次舵机脉冲
pub async fn actuate_servo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ServoResponse>, ApiError> {
    state
        .pulse_servo_handler
        .handle(PulseServo {
            value: state.servo_pulse_value,
        })
        .await?;

    Ok(Json(ServoResponse { message: "success" }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::hardware::rfid::MockRfidDevice;
    use crate::infrastructure::hardware::servo::MockServoDriver;
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTagRepository,
    };

    async fn test_state(servo: Arc<MockServoDriver>) -> Arc<AppState> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteTagRepository::new(pool));
        let rfid = Arc::new(MockRfidDevice::new());
        Arc::new(AppState::new(repo, rfid, servo, 10))
    }

    #[tokio::test]
    async fn test_servo_returns_success_and_pulses_once() {
        let servo = Arc::new(MockServoDriver::new());
        let app = create_routes().with_state(test_state(servo.clone()).await);

        let response = app
            .oneshot(Request::builder().uri("/servo/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "success"}));

        // 配置的指令值被下发且只下发一次
        assert_eq!(servo.pulses(), vec![10]);
    }

    #[tokio::test]
    async fn test_servo_driver_failure_returns_500() {
        let servo = Arc::new(MockServoDriver::new());
        servo.set_fail(true);
        let app = create_routes().with_state(test_state(servo).await);

        let response = app
            .oneshot(Request::builder().uri("/servo/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
