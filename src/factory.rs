//! 类型描述工厂
//!
//! 从组成部分构造 [`TypeDesc`] 的纯函数集合。
//! 工厂只做结构校验（参数化类型实参非空），不触碰缓存、
//! 不依赖令牌层；解析器与捕获方产出的描述树都经由这里组合。

use crate::error::ShapeError;
use crate::model::{RawClass, TypeDesc};

/// 构造参数化类型
///
/// 实参列表为空时拒绝：无实参的类应当直接用 [`TypeDesc::Raw`] 表达，
/// 两种形状不允许混淆。
pub fn parameterized_type(
    raw: impl Into<RawClass>,
    args: impl IntoIterator<Item = TypeDesc>,
) -> Result<TypeDesc, ShapeError> {
    let raw = raw.into();
    let args: Vec<TypeDesc> = args.into_iter().collect();
    if args.is_empty() {
        return Err(ShapeError::EmptyTypeArguments {
            raw: raw.qualified_name().to_string(),
        });
    }
    Ok(TypeDesc::Parameterized { raw, args })
}

/// 构造泛型数组类型
///
/// 元素类型可以再是数组，多维数组自然嵌套表达。
pub fn generic_array_type(component: TypeDesc) -> TypeDesc {
    TypeDesc::GenericArray(Box::new(component))
}

/// 构造无界通配符 `?`
pub fn unbounded_wildcard_type() -> TypeDesc {
    TypeDesc::Wildcard {
        upper: Vec::new(),
        lower: Vec::new(),
    }
}

/// 构造类型变量占位符
///
/// 占位符只用来表达"这里有一个未被解析的变量"这一事实，
/// 令牌层一律拒绝包含它的描述树。
pub fn type_variable(
    declared_by: impl Into<String>,
    name: impl Into<String>,
) -> TypeDesc {
    TypeDesc::Variable {
        declared_by: declared_by.into(),
        name: name.into(),
    }
}
