//! Camper records as returned by the roster endpoints.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camper {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Bunk (cabin) assignment, if any.
    #[serde(default)]
    pub bunk: Option<String>,
}

impl Camper {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
