// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use spider_task_client::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        assert!(tracing::dispatcher::has_been_set());

        // 第二次初始化只记录一条调试日志，不会panic
        telemetry::init_telemetry();
        assert!(tracing::dispatcher::has_been_set());

        tracing::debug!(task_id = 42, "dispatching request");
        tracing::warn!(code = 500, msg = "任务不存在", "Business error");
    }
}
