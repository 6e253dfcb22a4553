//! 递归类型描述
//!
//! 实现运行时类型形状：
//! - TypeDesc: 类型描述（五种变体）
//! - 结构化相等与哈希（派生实现，与构造路径无关）
//! - 限定名 / 简单名两种渲染
//!
//! # 设计思路
//!
//! - 描述树完全由值组成，不持有宿主运行时句柄
//! - 相等性逐变体、逐元素比较；实参顺序显著
//! - `Variable` 只作为"未解析占位符"存在，永远不出现在
//!   成功实化的令牌内部（由 token 层在包装时深度检查）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::raw::RawClass;

/// 类型描述（递归）
///
/// 描述一个泛型类型的完整结构。两个描述表示同一类型，
/// 当且仅当它们结构化相等；对象身份与构造路径无关紧要。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDesc {
    /// 原始类（无实参的叶子）
    Raw(RawClass),
    /// 参数化类型（原始类 + 非空实参序列）
    Parameterized {
        /// 原始类
        raw: RawClass,
        /// 类型实参（顺序显著，工厂保证非空）
        args: Vec<TypeDesc>,
    },
    /// 泛型数组（元素类型可任意嵌套）
    GenericArray(Box<TypeDesc>),
    /// 通配符（上界 / 下界序列；两者皆空即无界 `?`）
    Wildcard {
        /// 上界（`? extends A & B`）
        upper: Vec<TypeDesc>,
        /// 下界（`? super T`）
        lower: Vec<TypeDesc>,
    },
    /// 类型变量（未解析占位符，如捕获失败时的 `T`）
    Variable {
        /// 声明上下文（类或方法的限定名）
        declared_by: String,
        /// 变量名
        name: String,
    },
}

impl TypeDesc {
    /// 检查是否是原始类
    pub fn is_raw(&self) -> bool {
        matches!(self, TypeDesc::Raw(_))
    }

    /// 检查是否是参数化类型
    pub fn is_parameterized(&self) -> bool {
        matches!(self, TypeDesc::Parameterized { .. })
    }

    /// 检查是否是泛型数组
    pub fn is_generic_array(&self) -> bool {
        matches!(self, TypeDesc::GenericArray(_))
    }

    /// 检查是否是通配符
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeDesc::Wildcard { .. })
    }

    /// 检查是否是类型变量
    pub fn is_variable(&self) -> bool {
        matches!(self, TypeDesc::Variable { .. })
    }

    /// 类型实参序列（非参数化类型返回空切片）
    pub fn type_args(&self) -> &[TypeDesc] {
        match self {
            TypeDesc::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// 类型实参个数
    pub fn arg_count(&self) -> usize {
        self.type_args().len()
    }

    /// 擦除后的原始类
    ///
    /// `List<String>` 擦除为 `List`；数组沿元素方向取擦除类；
    /// 通配符与类型变量没有确定的擦除类，返回 `None`。
    pub fn erasure(&self) -> Option<&RawClass> {
        match self {
            TypeDesc::Raw(raw) => Some(raw),
            TypeDesc::Parameterized { raw, .. } => Some(raw),
            TypeDesc::GenericArray(component) => component.erasure(),
            TypeDesc::Wildcard { .. } | TypeDesc::Variable { .. } => None,
        }
    }

    /// 深度优先查找第一个类型变量，返回其变量名
    ///
    /// 描述树中存在变量即意味着该描述不可实化，
    /// token 层以此为拒绝依据。
    pub fn find_type_variable(&self) -> Option<&str> {
        match self {
            TypeDesc::Raw(_) => None,
            TypeDesc::Parameterized { args, .. } => {
                args.iter().find_map(|arg| arg.find_type_variable())
            }
            TypeDesc::GenericArray(component) => component.find_type_variable(),
            TypeDesc::Wildcard { upper, lower } => upper
                .iter()
                .chain(lower.iter())
                .find_map(|bound| bound.find_type_variable()),
            TypeDesc::Variable { name, .. } => Some(name),
        }
    }

    /// 获取类型的字符串描述（完整限定名）
    pub fn type_name(&self) -> String {
        self.render(true)
    }

    /// 获取类型的字符串描述（简单名）
    pub fn unqualified_name(&self) -> String {
        self.render(false)
    }

    fn render(&self, qualify: bool) -> String {
        match self {
            TypeDesc::Raw(raw) => {
                if qualify {
                    raw.qualified_name().to_string()
                } else {
                    raw.simple_name().to_string()
                }
            }
            TypeDesc::Parameterized { raw, args } => {
                let head = if qualify {
                    raw.qualified_name()
                } else {
                    raw.simple_name()
                };
                // 实参之间用逗号分隔，不加空格，保证 parse(render(t)) == t
                let args_str = args
                    .iter()
                    .map(|arg| arg.render(qualify))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{}<{}>", head, args_str)
            }
            TypeDesc::GenericArray(component) => format!("{}[]", component.render(qualify)),
            TypeDesc::Wildcard { upper, lower } => {
                if !lower.is_empty() {
                    format!("? super {}", Self::render_bounds(lower, qualify))
                } else if !upper.is_empty() {
                    format!("? extends {}", Self::render_bounds(upper, qualify))
                } else {
                    "?".to_string()
                }
            }
            TypeDesc::Variable { name, .. } => name.clone(),
        }
    }

    fn render_bounds(bounds: &[TypeDesc], qualify: bool) -> String {
        bounds
            .iter()
            .map(|bound| bound.render(qualify))
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl From<RawClass> for TypeDesc {
    fn from(raw: RawClass) -> Self {
        TypeDesc::Raw(raw)
    }
}
