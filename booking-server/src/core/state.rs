use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::notice::NoticeCenter;
use crate::store::{MemoryStorage, RedbStorage, ReservationStore};

/// 服务器状态 - 持有配置与各服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | ReservationStore | 预订集合 (唯一持有者) |
/// | notices | NoticeCenter | 应用内通知槽位 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 预订集合与持久化
    pub store: ReservationStore,
    /// 应用内通知
    pub notices: NoticeCenter,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保 database 目录存在)
    /// 2. 嵌入式数据库 (work_dir/database/reservations.redb)
    /// 3. 预订集合 (加载，或首次启动时播种示例数据)
    pub fn initialize(config: &Config) -> Result<Self> {
        let db_dir = PathBuf::from(&config.work_dir).join("database");
        std::fs::create_dir_all(&db_dir)?;

        let db_path = db_dir.join("reservations.redb");
        let storage = RedbStorage::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Reservation database opened");

        Ok(Self {
            config: config.clone(),
            store: ReservationStore::initialize(Arc::new(storage)),
            notices: NoticeCenter::new(),
        })
    }

    /// 测试用状态：内存存储，不触盘
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            store: ReservationStore::initialize(Arc::new(MemoryStorage::new())),
            notices: NoticeCenter::new(),
        }
    }
}
