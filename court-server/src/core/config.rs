/// 服务器配置 - 美食广场节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | CATALOG_PATH | (embedded) | 餐厅目录 JSON 文件路径 |
/// | GEMINI_API_KEY | (unset) | 推荐服务 API key，未设置时禁用推荐 |
/// | GEMINI_MODEL | gemini-2.0-flash | 推荐服务模型 |
/// | GEMINI_BASE_URL | https://generativelanguage.googleapis.com | 推荐服务地址 |
/// | REWARD_SEED_ORDERS | 3 | 周订单计数起始值（演示数据） |
/// | REWARD_SEED_BALANCE | 20 | 礼品卡余额起始值（演示数据） |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 REWARD_SEED_ORDERS=0 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 餐厅目录文件路径；None 时使用内置演示目录
    pub catalog_path: Option<String>,
    /// 推荐服务 API key；None 时推荐接口不可用
    pub gemini_api_key: Option<String>,
    /// 推荐服务模型名
    pub gemini_model: String,
    /// 推荐服务基础 URL
    pub gemini_base_url: String,
    /// 周订单计数起始值
    pub reward_seed_orders: u32,
    /// 礼品卡余额起始值
    pub reward_seed_balance: i64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            catalog_path: std::env::var("CATALOG_PATH").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            reward_seed_orders: std::env::var("REWARD_SEED_ORDERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            reward_seed_balance: std::env::var("REWARD_SEED_BALANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            catalog_path: None,
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".into(),
            gemini_base_url: "https://generativelanguage.googleapis.com".into(),
            reward_seed_orders: 3,
            reward_seed_balance: 20,
            environment: "development".into(),
        }
    }
}
