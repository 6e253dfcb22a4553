//! 类型描述数据模型
//!
//! 实现运行时类型形状的数据表示：
//! - RawClass: 原始类名（点分限定名叶子）
//! - TypeDesc: 递归类型描述（原始类 / 参数化 / 泛型数组 / 通配符 / 类型变量）
//!
//! 模型层是纯数据：相等、哈希、渲染都在这里，
//! 构造校验在 [`crate::factory`]，包装与缓存在 [`crate::token`]。

mod desc;
mod raw;

pub use desc::TypeDesc;
pub use raw::RawClass;
