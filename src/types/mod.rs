//! 请求/响应载荷形状声明
//!
//! 纯数据形状，不定义任何行为；各 API 模块按需引用。

pub mod common;
pub mod dashboard;
pub mod leaderboard;
