use crate::LearnerError;

/// Discrete paddle action. The discriminant is the column in the Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Down = 0,
    Up = 1,
    Stay = 2,
}

impl Action {
    pub const COUNT: usize = 3;
    pub const ALL: [Action; Action::COUNT] = [Action::Down, Action::Up, Action::Stay];

    /// Column index in the Q-table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Vertical direction in screen space: 1 = down, -1 = up, 0 = stay
    pub fn dir(self) -> i8 {
        match self {
            Action::Down => 1,
            Action::Up => -1,
            Action::Stay => 0,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = LearnerError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or(LearnerError::ActionOutOfRange { action: index })
    }
}
