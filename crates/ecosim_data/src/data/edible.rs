use super::vector::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which resource population an edible belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdibleKind {
    /// Restores health by its size.
    Food,
    /// Removes health by its size.
    Poison,
}

/// A consumable resource item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edible {
    pub id: Uuid,
    pub kind: EdibleKind,
    pub position: Vec2,
    pub size: f64,
}

impl Edible {
    /// Health change applied to whoever eats this item.
    #[must_use]
    pub fn reward(&self) -> f64 {
        match self.kind {
            EdibleKind::Food => self.size,
            EdibleKind::Poison => -self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_sign_follows_kind() {
        let mut e = Edible {
            id: Uuid::nil(),
            kind: EdibleKind::Food,
            position: Vec2::ZERO,
            size: 4.0,
        };
        assert_eq!(e.reward(), 4.0);
        e.kind = EdibleKind::Poison;
        assert_eq!(e.reward(), -4.0);
    }
}
