use thiserror::Error;

/// 服务器启动和运行错误
///
/// API 处理器使用 [`crate::utils::AppError`]；这里只覆盖启动路径
/// (工作目录、数据库、端口绑定)。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StorageError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// 启动路径的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
