//! 兴趣匹配器
//!
//! 判断参与者兴趣与活动类型是否相关，并据此对活动列表做稳定分区排序。

use crate::compatibility::CompatibilityTable;
use crate::models::{CategorySource, ParticipantProfile};
use crate::taxonomy::{EventCategory, InterestSet, InterestTag};
use tracing::debug;

/// 兴趣匹配器
#[derive(Debug, Clone, Default)]
pub struct InterestMatcher {
    table: CompatibilityTable,
}

impl InterestMatcher {
    pub fn new(table: CompatibilityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CompatibilityTable {
        &self.table
    }

    /// 兴趣是否与活动类型相关
    ///
    /// 未知活动类型视为“无匹配”而非错误：活动类型可能先于代码上线。
    pub fn is_match(&self, tags: &InterestSet, category: &str) -> bool {
        if tags.is_empty() {
            return false;
        }

        match EventCategory::parse(category) {
            Some(category) => self.is_match_category(tags, category),
            None => {
                debug!(category, "未知活动类型，按无匹配处理");
                false
            }
        }
    }

    /// 已解析活动类型的匹配判断
    pub fn is_match_category(&self, tags: &InterestSet, category: EventCategory) -> bool {
        self.table.interests_for(category).intersects(tags)
    }

    /// 按相关性重排：匹配项在前，两个分区内部保持原有顺序
    pub fn rank_by_relevance<T, C>(&self, items: Vec<(T, C)>, tags: &InterestSet) -> Vec<T>
    where
        C: AsRef<str>,
    {
        let (matched, rest): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|(_, category)| self.is_match(tags, category.as_ref()));

        matched
            .into_iter()
            .chain(rest)
            .map(|(item, _)| item)
            .collect()
    }

    /// 对实现了 CategorySource 的活动直接排序
    pub fn rank_events<T>(&self, events: Vec<T>, tags: &InterestSet) -> Vec<T>
    where
        T: CategorySource,
    {
        let (mut matched, rest): (Vec<T>, Vec<T>) = events
            .into_iter()
            .partition(|event| self.is_match(tags, event.category()));
        matched.extend(rest);
        matched
    }

    /// 与兴趣相关的全部活动类型，按枚举顺序返回
    pub fn matching_categories(&self, tags: &InterestSet) -> Vec<EventCategory> {
        EventCategory::ALL
            .into_iter()
            .filter(|category| self.is_match_category(tags, *category))
            .collect()
    }

    /// 组织方挑选参与者
    ///
    /// 可先按单个兴趣筛选；选定活动时再保留与其类型相关的参与者。
    /// 未选定活动时只按兴趣筛选。顺序不变。
    pub fn eligible_participants<'a>(
        &self,
        participants: &'a [ParticipantProfile],
        category: Option<&str>,
        interest_filter: Option<&InterestTag>,
    ) -> Vec<&'a ParticipantProfile> {
        participants
            .iter()
            .filter(|p| interest_filter.is_none_or(|tag| p.interest_tags.contains(tag)))
            .filter(|p| category.is_none_or(|c| self.is_match(&p.interest_tags, c)))
            .collect()
    }
}
