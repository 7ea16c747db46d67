/// A single observed transition in a discrete MDP
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The state before taking the action
    pub state: usize,
    /// The action taken in `state`
    pub action: usize,
    /// The state reached after the action
    pub next_state: usize,
    /// The reward received for the transition
    pub reward: f64,
}

impl Transition {
    pub fn new(state: usize, action: usize, next_state: usize, reward: f64) -> Self {
        Self {
            state,
            action,
            next_state,
            reward,
        }
    }
}

impl From<(usize, usize, usize, f64)> for Transition {
    fn from((state, action, next_state, reward): (usize, usize, usize, f64)) -> Self {
        Self::new(state, action, next_state, reward)
    }
}
