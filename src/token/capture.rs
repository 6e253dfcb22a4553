//! 声明点捕获边界
//!
//! 宿主运行时在声明点（匿名子类）通过反射取得父类泛型实参后，
//! 交给本库的形式就是 [`Capture`]：描述树加捕获链深度。
//! 反射本身如何进行不是本库的事。

use crate::model::TypeDesc;

/// 声明点捕获结果
///
/// `depth` 是捕获点与令牌基类之间的子类派生层数：
/// 直接匿名子类是 1，再派生一次是 2。令牌层只接受 1。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    desc: TypeDesc,
    depth: usize,
}

impl Capture {
    /// 以显式深度创建捕获结果
    pub fn new(desc: TypeDesc, depth: usize) -> Self {
        Self { desc, depth }
    }

    /// 直接捕获（深度 1）
    pub fn direct(desc: TypeDesc) -> Self {
        Self::new(desc, 1)
    }

    /// 捕获到的描述树
    pub fn desc(&self) -> &TypeDesc {
        &self.desc
    }

    /// 捕获链深度
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 拆出描述树
    pub fn into_desc(self) -> TypeDesc {
        self.desc
    }
}
