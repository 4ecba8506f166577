use crate::domain::phone::NormalizedPhone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub phone: NormalizedPhone,
    pub message: String,
    pub link: String,
    #[serde(default)]
    pub done: bool,
}

impl OrderRecord {
    pub fn new(phone: NormalizedPhone, message: String, link: String) -> Self {
        Self {
            phone,
            message,
            link,
            done: false,
        }
    }
}
