//! Tagbox - RFID 标签发放与查验服务
//!
//! 启动顺序: 配置 → 日志 → 数据库 → 硬件适配器 → HTTP 服务器

use std::sync::Arc;

use tagbox::application::ports::{RfidDevicePort, ServoDriverPort};
use tagbox::config::{load_config, print_config};
#[cfg(feature = "hardware")]
use tagbox::infrastructure::hardware::rfid::{Mfrc522Device, Mfrc522DeviceConfig};
#[cfg(not(feature = "hardware"))]
use tagbox::infrastructure::hardware::rfid::MockRfidDevice;
#[cfg(not(feature = "hardware"))]
use tagbox::infrastructure::hardware::servo::MockServoDriver;
#[cfg(feature = "hardware")]
use tagbox::infrastructure::hardware::servo::{PwmServoDriver, PwmServoDriverConfig};
use tagbox::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tagbox::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTagRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},tagbox={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Tagbox - RFID 标签发放与查验服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let tag_repo = Arc::new(SqliteTagRepository::new(pool.clone()));

    // 创建硬件适配器（hardware feature 启用时走真实设备，否则 Mock）
    #[cfg(feature = "hardware")]
    let (rfid, servo): (Arc<dyn RfidDevicePort>, Arc<dyn ServoDriverPort>) = {
        let rfid = Mfrc522Device::new(Mfrc522DeviceConfig {
            reset_pin: config.hardware.reset_pin,
            spi_clock_hz: config.hardware.spi_clock_hz,
            poll_interval_ms: config.hardware.poll_interval_ms,
            read_timeout_secs: config.hardware.read_timeout_secs,
            write_timeout_secs: config.hardware.write_timeout_secs,
        });
        let servo = PwmServoDriver::new(PwmServoDriverConfig {
            channel: config.servo.channel,
            hold_ms: config.servo.hold_ms,
        });
        (Arc::new(rfid), Arc::new(servo))
    };

    #[cfg(not(feature = "hardware"))]
    let (rfid, servo): (Arc<dyn RfidDevicePort>, Arc<dyn ServoDriverPort>) = {
        tracing::warn!("hardware feature disabled, using mock RFID device and servo driver");
        (
            Arc::new(MockRfidDevice::new()),
            Arc::new(MockServoDriver::new()),
        )
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(tag_repo, rfid, servo, config.servo.pulse_value);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
