/// 服务器配置 - 订位服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/oronero | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADMIN_PASSWORD | admin | 管理门禁口令 (UI 门禁，非安全凭证) |
/// | PAYMENT_URL | https://www.paypal.com/paypalme/oronero | 定金支付基础链接 |
/// | WEBHOOK_URL | (未设置) | 预订提交通知 webhook，可选 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/oronero HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 管理门禁口令 (明文比对，只是 UI 层的门禁)
    pub admin_password: String,
    /// 定金支付的外部基础链接 (追加 amount 参数后交给客户端打开)
    pub payment_base_url: String,
    /// 预订提交的 webhook 通知地址；未配置则完全禁用
    pub webhook_url: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/oronero".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into()),
            payment_base_url: std::env::var("PAYMENT_URL")
                .unwrap_or_else(|_| "https://www.paypal.com/paypalme/oronero".into()),
            webhook_url: std::env::var("WEBHOOK_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
