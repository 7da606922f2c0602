//! Oro Nero Booking Server - 餐厅订位服务
//!
//! # 架构概述
//!
//! 本模块是订位服务的主入口，提供以下核心功能：
//!
//! - **预订存储** (`store`): 单键 JSON 持久化，可注入的存储端口
//! - **预订流程** (`booking`): Details → PaymentConfirm → Success 状态机
//! - **管理面板** (`admin`): 过滤、排序、统计
//! - **通知** (`notice`): 单槽位应用内通知
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/      # 配置、状态、服务器、错误
//! ├── store/     # 预订集合与持久化
//! ├── booking/   # 客人预订流程
//! ├── admin/     # 管理面板逻辑
//! ├── notice/    # 应用内通知
//! ├── api/       # HTTP 路由和处理器
//! └── utils/     # 工具函数
//! ```

pub mod admin;
pub mod api;
pub mod booking;
pub mod core;
pub mod notice;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use booking::{BookingFlow, BookingStep};
pub use core::{Config, Server, ServerState};
pub use store::{ReservationStore, StoragePort};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// `.env` 文件不存在不算错误。
pub fn setup_environment() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        std::env::var("LOG_DIR").ok().as_deref(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____               _   _
  / __ \_________    / \ / /___  _________
 / /  / / ___/ __ \ /  |/ / _ \/ ___/ __ \
/ /__/ / /  / /_/ // /|  /  __/ /  / /_/ /
\____/_/   \____//_/ |_/\___/_/   \____/
    "#
    );
}
