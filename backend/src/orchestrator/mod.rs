//! World orchestration: configuration, initialization, and the tick loop

mod engine;

pub use engine::{
    ConfigError, RobotView, TickResult, WasteView, World, WorldConfig,
};
