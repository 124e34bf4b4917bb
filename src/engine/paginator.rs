// ==========================================
// 物流バックオフィス - 分页引擎
// ==========================================
// 规则:
//   total_pages = ceil(total / page_size)
//   请求页码钳制到 [1, total_pages]，越界不报错
//   切片区间 [(page-1)*size, page*size)
//   空集合: total_pages = 0, current_page = 1，画面显示空状态
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认每页件数
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// 分页信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub is_empty: bool,
}

impl PageInfo {
    /// 当前页在全体中的区间（0 起始，左闭右开）
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// "n 件中 a〜b 件" 形式的显示区间（1 起始），空集合返回 None
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.is_empty {
            return None;
        }
        let range = self.range();
        Some((range.start + 1, range.end))
    }
}

/// 总页数
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// 钳制页码
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// 计算分页信息（page_size 为 0 时按 1 处理）
pub fn page_info(total_items: usize, requested_page: usize, page_size: usize) -> PageInfo {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total_items, page_size);
    let current_page = clamp_page(requested_page, total_pages);
    PageInfo {
        current_page,
        total_pages,
        page_size,
        total_items,
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
        is_empty: total_items == 0,
    }
}

/// 分页切片
pub fn paginate<T>(items: &[T], requested_page: usize, page_size: usize) -> (PageInfo, &[T]) {
    let info = page_info(items.len(), requested_page, page_size);
    let window = &items[info.range()];
    (info, window)
}
