//! 原始类名
//!
//! `RawClass` 表示一个已被宿主运行时擦除的类：只保留点分限定名。
//! 相等性与哈希完全由名称决定，不持有任何运行时句柄，
//! 因此可以自由克隆、比较与持久化。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 原始类（点分限定名）
///
/// 类型描述树的叶子。`java.util.List` 与 `java.util.List` 相等，
/// 与 `java.util.ArrayList` 不相等，仅此而已。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawClass(String);

impl RawClass {
    /// 由点分限定名创建
    pub fn new(name: impl Into<String>) -> Self {
        RawClass(name.into())
    }

    /// 完整限定名（如 `java.util.List`）
    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// 简单名（最后一个 `.` 之后的部分）
    pub fn simple_name(&self) -> &str {
        match self.0.rsplit_once('.') {
            Some((_, simple)) => simple,
            None => &self.0,
        }
    }
}

// ============================================================================
// 常用宿主类速查 - 测试与调用方高频使用的类名
// ============================================================================

impl RawClass {
    /// `java.lang.Object`
    pub fn object() -> Self {
        RawClass::new("java.lang.Object")
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        RawClass::new("java.lang.String")
    }

    /// `java.lang.Boolean`
    pub fn boolean() -> Self {
        RawClass::new("java.lang.Boolean")
    }

    /// `java.lang.Byte`
    pub fn byte() -> Self {
        RawClass::new("java.lang.Byte")
    }

    /// `java.lang.Character`
    pub fn character() -> Self {
        RawClass::new("java.lang.Character")
    }

    /// `java.lang.Double`
    pub fn double() -> Self {
        RawClass::new("java.lang.Double")
    }

    /// `java.lang.Float`
    pub fn float() -> Self {
        RawClass::new("java.lang.Float")
    }

    /// `java.lang.Integer`
    pub fn integer() -> Self {
        RawClass::new("java.lang.Integer")
    }

    /// `java.lang.Long`
    pub fn long() -> Self {
        RawClass::new("java.lang.Long")
    }

    /// `java.lang.Short`
    pub fn short() -> Self {
        RawClass::new("java.lang.Short")
    }

    /// `java.util.Collection`
    pub fn collection() -> Self {
        RawClass::new("java.util.Collection")
    }

    /// `java.util.List`
    pub fn list() -> Self {
        RawClass::new("java.util.List")
    }

    /// `java.util.Map`
    pub fn map() -> Self {
        RawClass::new("java.util.Map")
    }

    /// `java.util.Set`
    pub fn set() -> Self {
        RawClass::new("java.util.Set")
    }
}

impl From<&str> for RawClass {
    fn from(name: &str) -> Self {
        RawClass::new(name)
    }
}

impl From<String> for RawClass {
    fn from(name: String) -> Self {
        RawClass(name)
    }
}

impl fmt::Display for RawClass {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
