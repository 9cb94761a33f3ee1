//! 活动列表筛选

use crate::models::EventListing;
use crate::taxonomy::EventCategory;
use serde::{Deserialize, Serialize};

/// 活动筛选条件，未设置的条件不参与过滤
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// 城市关键字（不区分大小写的子串匹配）
    pub city: Option<String>,
    pub category: Option<EventCategory>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        let city = city.into();
        // 空关键字等同于不过滤
        self.city = (!city.trim().is_empty()).then_some(city);
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matches(&self, event: &EventListing) -> bool {
        let city_ok = self.city.as_ref().is_none_or(|needle| {
            event
                .city
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = self
            .category
            .is_none_or(|category| event.category == category.as_str());

        city_ok && category_ok
    }

    /// 过滤并保持原有顺序
    pub fn apply(&self, events: Vec<EventListing>) -> Vec<EventListing> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}
