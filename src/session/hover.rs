use uuid::Uuid;

/// Identity of one hover interaction.
///
/// Issued when a hover begins; a settling fetch must present the same token or
/// its result is ignored. This replaces timer-based choreography: races between
/// overlapping fetches resolve by comparison, not timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoverToken(Uuid);

impl HoverToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// How a hover's metadata fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    Shown,
    Failed,
}

/// Lifecycle of the currently hovered item.
///
/// `Idle → Pending → Shown | Failed`; leaving returns to `Idle` from any
/// state, and a new hover supersedes whatever was current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Pending {
        token: HoverToken,
        reference: String,
    },
    Shown {
        token: HoverToken,
        reference: String,
    },
    Failed {
        token: HoverToken,
        reference: String,
    },
}

impl HoverState {
    /// Starts a hover on `reference`, superseding any current one, and returns
    /// the token its fetch must settle with.
    pub fn begin(&mut self, reference: &str) -> HoverToken {
        let token = HoverToken::new();
        *self = HoverState::Pending {
            token,
            reference: reference.to_string(),
        };
        token
    }

    /// Settles a pending fetch. Returns false and leaves the state untouched
    /// when the token is stale, i.e. the hovered target changed (or the hover
    /// ended) while the fetch was in flight.
    pub fn settle(&mut self, token: HoverToken, outcome: HoverOutcome) -> bool {
        match self {
            HoverState::Pending {
                token: current,
                reference,
            } if *current == token => {
                let reference = std::mem::take(reference);
                *self = match outcome {
                    HoverOutcome::Shown => HoverState::Shown { token, reference },
                    HoverOutcome::Failed => HoverState::Failed { token, reference },
                };
                true
            }
            _ => false,
        }
    }

    /// The pointer left the item; any in-flight fetch for it becomes stale.
    pub fn leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn token(&self) -> Option<HoverToken> {
        match self {
            HoverState::Idle => None,
            HoverState::Pending { token, .. }
            | HoverState::Shown { token, .. }
            | HoverState::Failed { token, .. } => Some(*token),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            HoverState::Idle => None,
            HoverState::Pending { reference, .. }
            | HoverState::Shown { reference, .. }
            | HoverState::Failed { reference, .. } => Some(reference),
        }
    }
}
