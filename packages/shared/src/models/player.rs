use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub is_computer: bool,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Player {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            is_computer: false,
        }
    }

    pub fn computer(name: &str) -> Self {
        Player {
            is_computer: true,
            ..Player::new(name)
        }
    }
}
