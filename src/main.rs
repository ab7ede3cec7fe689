// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use redis_demo::config::settings::Settings;
use redis_demo::demo::scenarios::{parse_scenarios, run_scenarios, KeySpace};
use redis_demo::infrastructure::cache::template::RedisTemplate;
use redis_demo::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 加载配置、连接Redis，按顺序执行演示场景并打印结果
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    if settings.logging.format.eq_ignore_ascii_case("json") {
        telemetry::init_json_telemetry();
    } else {
        telemetry::init_telemetry();
    }
    info!("Starting redis-demo...");

    // 3. Resolve scenarios before touching the store
    let scenarios = parse_scenarios(&settings.demo.scenarios)?;
    let keys = KeySpace::new(settings.demo.key_prefix.clone());

    // 4. Connect to Redis
    let template = RedisTemplate::connect(&settings.redis.connection_url()).await?;
    info!("Redis client initialized");

    // 5. Run scenarios
    let reports = run_scenarios(&template, &scenarios, &keys).await?;
    for report in &reports {
        println!("{}", report);
    }

    info!("Completed {} scenarios", reports.len());
    Ok(())
}
