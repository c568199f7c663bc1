mod delivery;
mod frame;
mod game;
mod rack;
mod scorer;
mod symbols;

pub mod invariants;

pub use delivery::{
    ClosedReason, Delivery, DeliveryError, FOUL_TOKEN, PINS_PER_RACK, SPLIT_PREFIX,
};
pub use frame::{Frame, Mark, ScoredFrame};
pub use game::{DeliverySlot, FRAMES_PER_GAME, Game, RecordOutcome, ReplayError};
pub use rack::{FrameKind, Rack};
pub use scorer::{GameScorer, Resolution, ResolvedFrame, resolve};
pub use symbols::{Symbol, frame_symbols};
