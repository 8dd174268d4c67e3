//! Court Server - food-court ordering core
//!
//! Single-process, in-memory backend for a food-court ordering demo:
//! customers browse stall menus, build a single-restaurant cart, check out
//! and track their order; vendors advance incoming orders through a linear
//! preparation lifecycle. State is volatile and scoped to one running
//! session; there is no persistence and no payment capture.
//!
//! # Module structure
//!
//! ```text
//! court-server/src/
//! ├── core/          # 配置、状态、服务器引导
//! ├── orders/        # Order & cart state manager + active-order tracker
//! ├── services/      # Catalog provider, AI recommendation capability
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误处理、日志
//! ```

pub mod api;
pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, ServerState};
pub use orders::{OrderError, OrdersManager, PlaceOrderError, SessionError};
pub use services::{CatalogService, GeminiRecommender, Recommender};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                 __
  / ____/___  __  _______/ /_
 / /   / __ \/ / / / ___/ __/
/ /___/ /_/ / /_/ / /  / /_
\____/\____/\__,_/_/   \__/   food court v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
