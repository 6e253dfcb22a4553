//! 类名解析
//!
//! 把点分限定名解析为原始类句柄：
//!
//! | 项 | 角色 |
//! |----|------|
//! | [`ClassResolver`] | 解析接口，宿主类加载机制在本库中的边界 |
//! | [`ClassRegistry`] | 基于名单的线程安全参考实现 |
//! | [`default_registry`] | 进程级默认注册表（JDK 核心类预置） |
//!
//! # 设计思路
//!
//! - 解析失败返回 `None`，错误措辞由调用方（描述解析器）决定
//! - 注册与解析可以并发进行：内部 `parking_lot::RwLock` 即是
//!   类加载器自身的加锁行为，库的其余部分不再额外加锁

use std::collections::HashSet;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::model::RawClass;

/// 名称解析器
///
/// 解析成功返回原始类句柄，失败返回 `None`。
pub trait ClassResolver {
    /// 解析点分限定名
    fn resolve(&self, name: &str) -> Option<RawClass>;
}

/// 默认注册表预置的 JDK 核心类名
const DEFAULT_CLASS_NAMES: &[&str] = &[
    // java.lang
    "java.lang.Object",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Double",
    "java.lang.Float",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Short",
    "java.lang.String",
    "java.lang.Number",
    "java.lang.CharSequence",
    "java.lang.Comparable",
    "java.lang.Iterable",
    "java.lang.Void",
    // java.util
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.Map",
    "java.util.Queue",
    "java.util.Deque",
    "java.util.Iterator",
    "java.util.Optional",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.HashMap",
    "java.util.HashSet",
    "java.util.LinkedHashMap",
    "java.util.LinkedHashSet",
    "java.util.TreeMap",
    "java.util.TreeSet",
];

/// 进程级默认注册表
static DEFAULT_REGISTRY: Lazy<ClassRegistry> = Lazy::new(ClassRegistry::with_defaults);

/// 获取进程级默认注册表
///
/// [`crate::token::GenericToken::value_of`] 使用它解析描述文本。
/// 运行时可以继续注册新类名，注册立即对后续解析可见。
pub fn default_registry() -> &'static ClassRegistry {
    &DEFAULT_REGISTRY
}

/// 类名注册表
///
/// 线程安全的已知类名单。解析即查询名单并即席创建句柄。
#[derive(Debug, Default)]
pub struct ClassRegistry {
    names: RwLock<HashSet<String>>,
}

impl ClassRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            names: RwLock::new(HashSet::new()),
        }
    }

    /// 创建预置 JDK 核心类名的注册表
    pub fn with_defaults() -> Self {
        let registry = ClassRegistry::new();
        registry.register_all(DEFAULT_CLASS_NAMES.iter().copied());
        debug!(
            "class registry seeded with {} default names",
            registry.len()
        );
        registry
    }

    /// 注册一个类名
    ///
    /// 首次注册返回 `true`，重复注册返回 `false`（名单不变）。
    pub fn register(
        &self,
        name: impl Into<String>,
    ) -> bool {
        self.names.write().insert(name.into())
    }

    /// 批量注册类名
    pub fn register_all<I, S>(
        &self,
        names: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut guard = self.names.write();
        for name in names {
            guard.insert(name.into());
        }
    }

    /// 检查类名是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.names.read().contains(name)
    }

    /// 已注册类名数量
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    /// 检查名单是否为空
    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }

    /// 获取已注册类名的快照
    pub fn names(&self) -> Vec<String> {
        self.names.read().iter().cloned().collect()
    }
}

impl ClassResolver for ClassRegistry {
    fn resolve(&self, name: &str) -> Option<RawClass> {
        if self.names.read().contains(name) {
            Some(RawClass::new(name))
        } else {
            None
        }
    }
}
