//! 错误类型定义
//!
//! 定义描述树构造与令牌校验过程中的所有错误类型。
//! 解析错误单独定义在 [`crate::parser::ParseError`]。

use thiserror::Error;

/// 构造形状错误
///
/// 工厂在组合描述树时的结构性拒绝
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// 参数化类型的实参列表为空
    #[error("parameterized type {raw} requires at least one type argument")]
    EmptyTypeArguments { raw: String },
}

/// 令牌校验错误
///
/// 把描述包装为可用令牌时的拒绝原因。
/// 前三个变体的消息措辞是对外契约，调用方依赖其精确文本。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 捕获链深度超过一层
    #[error("Generic must only be subclassed once")]
    SubclassedTwice,

    /// 顶层通配符无法实化
    #[error("Wildcard types are not supported: {rendered}")]
    UnsupportedWildcard { rendered: String },

    /// 描述树中存在未解析的类型变量
    #[error("Type variables are not supported: {name}")]
    UnsupportedTypeVariable { name: String },

    /// 工厂拒绝（经令牌构造路径冒泡）
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
