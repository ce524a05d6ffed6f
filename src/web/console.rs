//! 控制台诊断日志
//!
//! WASM 环境写入浏览器控制台；原生环境（单元测试）下为空实现，
//! 避免在没有 window 的进程里触碰 JS 绑定。

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_msg: &str) {}
