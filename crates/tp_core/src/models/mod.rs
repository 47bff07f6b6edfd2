pub mod player;
pub mod session;
pub mod settings;

pub use player::{InitialAssessment, Player, PlayerProfile};
pub use session::{
    Category, CombinedDirection, CourtSide, GroundstrokeDirection, SeriesResult, ServeType,
    TargetStrip, TestSession, TestType, VolleyDirection,
};
pub use settings::{PrecisionTimeStrategy, Settings, StdDevMode};
