//! Packing list completion.

use serde::{Deserialize, Serialize};

use crate::rates::{bar_width, rate};
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PackingProgress {
    pub checked: i64,
    pub total: i64,
    pub percent: i64,
}

impl PackingProgress {
    pub fn from_items(items: &[PackingItem]) -> Self {
        let total = items.len() as i64;
        let checked = items.iter().filter(|i| i.checked).count() as i64;
        Self {
            checked,
            total,
            percent: rate(checked, total),
        }
    }

    pub fn bar_width(&self) -> u8 {
        bar_width(self.percent)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}
