//! MFRC522 RFID Device - 树莓派 SPI 读写器
//!
//! 每次操作在自己的作用域内持有 GPIO 复位脚、SPI 总线与读写器句柄，
//! 任何退出路径（成功、超时、错误）都随 Drop 释放。
//! 读写器为单一物理资源，用互斥锁串行化并发请求；
//! 阻塞轮询在 blocking 线程池上执行，以配置的 deadline 约束等待。

use async_trait::async_trait;
use mfrc522::comm::eh02::spi::SpiInterface;
use mfrc522::Mfrc522;
use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::application::ports::{HardwareError, RfidDevicePort, TagScan};
use crate::domain::tag::BlockPayload;

/// 存放 key 的数据块号（扇区 2 第一块，避开各扇区尾部的 trailer 块）
const DATA_BLOCK: u8 = 8;

/// MIFARE Classic 出厂默认密钥
const DEFAULT_KEY: [u8; 6] = [0xFF; 6];

/// MFRC522 设备配置
#[derive(Debug, Clone)]
pub struct Mfrc522DeviceConfig {
    /// 复位脚（BCM 编号）
    pub reset_pin: u8,
    /// SPI 时钟频率（Hz）
    pub spi_clock_hz: u32,
    /// 等待标签在场的轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 读操作超时（秒）
    pub read_timeout_secs: u64,
    /// 写操作超时（秒）
    pub write_timeout_secs: u64,
}

impl Default for Mfrc522DeviceConfig {
    fn default() -> Self {
        Self {
            reset_pin: 25,
            spi_clock_hz: 1_000_000,
            poll_interval_ms: 50,
            read_timeout_secs: 10,
            write_timeout_secs: 10,
        }
    }
}

/// MFRC522 RFID Device
pub struct Mfrc522Device {
    config: Mfrc522DeviceConfig,
    /// 串行化物理访问
    hw_lock: Mutex<()>,
}

impl Mfrc522Device {
    pub fn new(config: Mfrc522DeviceConfig) -> Self {
        tracing::info!(
            reset_pin = config.reset_pin,
            spi_clock_hz = config.spi_clock_hz,
            "Mfrc522Device initialized"
        );
        Self {
            config,
            hw_lock: Mutex::new(()),
        }
    }
}

/// 复位脚拉高，使芯片退出复位态；句柄 Drop 时自动释放
fn claim_reset_pin(config: &Mfrc522DeviceConfig) -> Result<OutputPin, HardwareError> {
    let gpio = Gpio::new().map_err(|e| HardwareError::DeviceUnavailable(e.to_string()))?;
    let pin = gpio
        .get(config.reset_pin)
        .map_err(|e| HardwareError::DeviceUnavailable(e.to_string()))?
        .into_output_high();
    Ok(pin)
}

fn open_spi(config: &Mfrc522DeviceConfig) -> Result<Spi, HardwareError> {
    Spi::new(
        Bus::Spi0,
        SlaveSelect::Ss0,
        config.spi_clock_hz,
        Mode::Mode0,
    )
    .map_err(|e| HardwareError::DeviceUnavailable(e.to_string()))
}

fn uid_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// 阻塞读取：轮询 REQA 直到标签在场或到达 deadline
fn read_blocking(config: &Mfrc522DeviceConfig) -> Result<TagScan, HardwareError> {
    let _reset = claim_reset_pin(config)?;
    let spi = open_spi(config)?;
    let mut reader = Mfrc522::new(SpiInterface::new(spi))
        .init()
        .map_err(|e| HardwareError::DeviceUnavailable(format!("{:?}", e)))?;

    let deadline = Instant::now() + Duration::from_secs(config.read_timeout_secs);
    loop {
        if let Ok(atqa) = reader.reqa() {
            let uid = reader
                .select(&atqa)
                .map_err(|e| HardwareError::ReadFailed(format!("{:?}", e)))?;
            reader
                .mf_authenticate(&uid, DATA_BLOCK, &DEFAULT_KEY)
                .map_err(|e| HardwareError::ReadFailed(format!("{:?}", e)))?;
            let block = reader
                .mf_read(DATA_BLOCK)
                .map_err(|e| HardwareError::ReadFailed(format!("{:?}", e)))?;
            let _ = reader.hlta();
            let _ = reader.stop_crypto1();

            let payload = BlockPayload::from_bytes(block);
            return Ok(TagScan {
                uid: uid_to_hex(uid.as_bytes()),
                text: payload.to_trimmed_string(),
            });
        }

        if Instant::now() >= deadline {
            return Err(HardwareError::Timeout);
        }
        std::thread::sleep(Duration::from_millis(config.poll_interval_ms));
    }
}

/// 阻塞写入：轮询 REQA 直到标签在场或到达 deadline
fn write_blocking(
    config: &Mfrc522DeviceConfig,
    payload: BlockPayload,
) -> Result<(), HardwareError> {
    let _reset = claim_reset_pin(config)?;
    let spi = open_spi(config)?;
    let mut reader = Mfrc522::new(SpiInterface::new(spi))
        .init()
        .map_err(|e| HardwareError::DeviceUnavailable(format!("{:?}", e)))?;

    let deadline = Instant::now() + Duration::from_secs(config.write_timeout_secs);
    loop {
        if let Ok(atqa) = reader.reqa() {
            let uid = reader
                .select(&atqa)
                .map_err(|e| HardwareError::WriteFailed(format!("{:?}", e)))?;
            reader
                .mf_authenticate(&uid, DATA_BLOCK, &DEFAULT_KEY)
                .map_err(|e| HardwareError::WriteFailed(format!("{:?}", e)))?;
            reader
                .mf_write(DATA_BLOCK, *payload.as_bytes())
                .map_err(|e| HardwareError::WriteFailed(format!("{:?}", e)))?;
            let _ = reader.hlta();
            let _ = reader.stop_crypto1();

            return Ok(());
        }

        if Instant::now() >= deadline {
            return Err(HardwareError::Timeout);
        }
        std::thread::sleep(Duration::from_millis(config.poll_interval_ms));
    }
}

#[async_trait]
impl RfidDevicePort for Mfrc522Device {
    async fn read_tag(&self) -> Result<TagScan, HardwareError> {
        let _guard = self.hw_lock.lock().await;
        let config = self.config.clone();

        let scan = tokio::task::spawn_blocking(move || read_blocking(&config))
            .await
            .map_err(|e| HardwareError::DeviceUnavailable(e.to_string()))??;

        tracing::debug!(uid = %scan.uid, "Tag read from device");
        Ok(scan)
    }

    async fn write_tag(&self, payload: BlockPayload) -> Result<(), HardwareError> {
        let _guard = self.hw_lock.lock().await;
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || write_blocking(&config, payload))
            .await
            .map_err(|e| HardwareError::DeviceUnavailable(e.to_string()))??;

        tracing::debug!(text = %payload.to_trimmed_string(), "Tag written on device");
        Ok(())
    }
}
