//! 泛型令牌
//!
//! [`GenericToken`] 是调用方持有的不可变类型描述句柄：
//! 三条构造路径（声明点捕获 / 工厂描述 / 文本解析）产出结构化相等、
//! 哈希一致的令牌，构造路径在结果上不可区分。
//!
//! # 缓存设计
//!
//! | 输入 | 结果 |
//! |------|------|
//! | 闭集内原始类（十个常用类） | 共享缓存实例（`ptr_eq` 为真） |
//! | 其他原始类 | 每次调用新建，值相等 |
//! | 参数化 / 数组 | 每次调用新建，值相等 |
//!
//! 缓存用 `once_cell::sync::Lazy` 在首次访问时一次性建好，
//! 并发首访者阻塞等待同一个初始化结果，对外只有一个已发布实例。

mod capture;

pub use capture::Capture;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::TokenError;
use crate::factory;
use crate::model::{RawClass, TypeDesc};
use crate::parser::{self, ParseError};
use crate::resolve::{default_registry, ClassResolver};

/// 身份缓存闭集：八个装箱基本类型加 String 与 Object
const WELL_KNOWN_CLASSES: [&str; 10] = [
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
];

/// 常用类令牌缓存
static WELL_KNOWN_TOKENS: Lazy<HashMap<&'static str, GenericToken>> = Lazy::new(|| {
    let tokens: HashMap<&'static str, GenericToken> = WELL_KNOWN_CLASSES
        .iter()
        .map(|&name| (name, GenericToken::wrap(TypeDesc::Raw(RawClass::new(name)))))
        .collect();
    debug!("well-known token cache seeded with {} classes", tokens.len());
    tokens
});

/// 泛型令牌
///
/// 不可变；克隆是廉价的 `Arc` 克隆，与原令牌共享描述树。
/// 相等与哈希完全委托内部描述树，与构造路径无关。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericToken {
    desc: Arc<TypeDesc>,
}

impl GenericToken {
    /// 包装一个已通过校验的描述树
    fn wrap(desc: TypeDesc) -> Self {
        Self {
            desc: Arc::new(desc),
        }
    }

    /// 获取原始类令牌
    ///
    /// 闭集内的类返回共享缓存实例，其余类新建值相等的令牌。
    pub fn get(raw: impl Into<RawClass>) -> GenericToken {
        let raw = raw.into();
        if let Some(token) = WELL_KNOWN_TOKENS.get(raw.qualified_name()) {
            return token.clone();
        }
        Self::wrap(TypeDesc::Raw(raw))
    }

    /// 获取参数化类型令牌
    ///
    /// 实参为空时等价于 [`GenericToken::get`]：无实参就是原始类。
    pub fn get_with_args<I>(
        raw: impl Into<RawClass>,
        args: I,
    ) -> Result<GenericToken, TokenError>
    where
        I: IntoIterator<Item = TypeDesc>,
    {
        let raw = raw.into();
        let args: Vec<TypeDesc> = args.into_iter().collect();
        if args.is_empty() {
            return Ok(Self::get(raw));
        }
        let desc = factory::parameterized_type(raw, args)?;
        Self::from_desc(desc)
    }

    /// 由描述树构造令牌
    ///
    /// 拒绝顶层通配符与任何位置的类型变量；原始类走缓存路径，
    /// 其余形状原样包装。
    pub fn from_desc(desc: TypeDesc) -> Result<GenericToken, TokenError> {
        if desc.is_wildcard() {
            return Err(TokenError::UnsupportedWildcard {
                rendered: desc.type_name(),
            });
        }
        if let Some(name) = desc.find_type_variable() {
            let name = name.to_string();
            return Err(TokenError::UnsupportedTypeVariable { name });
        }
        match desc {
            TypeDesc::Raw(raw) => Ok(Self::get(raw)),
            other => Ok(Self::wrap(other)),
        }
    }

    /// 由声明点捕获结果构造令牌
    ///
    /// 捕获链深度必须恰为 1：令牌基类只允许被直接子类化一次。
    pub fn from_capture(capture: Capture) -> Result<GenericToken, TokenError> {
        trace!("validating capture at depth {}", capture.depth());
        if capture.depth() > 1 {
            return Err(TokenError::SubclassedTwice);
        }
        Self::from_desc(capture.into_desc())
    }

    /// 解析描述文本（进程默认注册表）
    pub fn value_of(text: &str) -> Result<GenericToken, ParseError> {
        Self::value_of_in(text, default_registry())
    }

    /// 解析描述文本（注入的解析器）
    pub fn value_of_in(
        text: &str,
        resolver: &dyn ClassResolver,
    ) -> Result<GenericToken, ParseError> {
        let desc = parser::parse_descriptor(text, resolver)?;
        // 语法不含顶层通配符与类型变量，解析结果必然可实化；
        // 原始类仍走缓存路径保持身份。
        match desc {
            TypeDesc::Raw(raw) => Ok(Self::get(raw)),
            other => Ok(Self::wrap(other)),
        }
    }

    /// 内部描述树
    pub fn desc(&self) -> &TypeDesc {
        &self.desc
    }

    /// 拆出描述树（与他人共享时克隆）
    pub fn into_desc(self) -> TypeDesc {
        Arc::try_unwrap(self.desc).unwrap_or_else(|shared| (*shared).clone())
    }

    /// 简单名渲染（如 `List<String>`）
    pub fn to_unqualified_string(&self) -> String {
        self.desc.unqualified_name()
    }

    /// 检查两个令牌是否共享同一实例
    ///
    /// 只有闭集缓存路径保证共享；值相等不蕴含实例相同。
    pub fn ptr_eq(this: &GenericToken, other: &GenericToken) -> bool {
        Arc::ptr_eq(&this.desc, &other.desc)
    }
}

impl fmt::Display for GenericToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.desc.type_name())
    }
}

impl FromStr for GenericToken {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        GenericToken::value_of(text)
    }
}

impl TryFrom<TypeDesc> for GenericToken {
    type Error = TokenError;

    fn try_from(desc: TypeDesc) -> Result<Self, Self::Error> {
        GenericToken::from_desc(desc)
    }
}

impl From<RawClass> for GenericToken {
    fn from(raw: RawClass) -> Self {
        GenericToken::get(raw)
    }
}

/// 令牌按内部描述树序列化，不携带缓存状态。
impl Serialize for GenericToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.desc.serialize(serializer)
    }
}

/// 反序列化重新走 [`GenericToken::from_desc`] 校验：
/// 序列化数据里的通配符或类型变量是数据错误，不会产出半成品令牌；
/// 闭集内的原始类恢复为共享缓存实例。
impl<'de> Deserialize<'de> for GenericToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let desc = TypeDesc::deserialize(deserializer)?;
        GenericToken::from_desc(desc).map_err(serde::de::Error::custom)
    }
}
